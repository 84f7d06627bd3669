use regex::Regex;
use std::sync::OnceLock;

use super::markers::BOM;

/// Extracts the patient name from a `Patient Name:` line
///
/// Takes the text after the first colon up to the first comma, so
/// `Patient Name: John Doe, M` yields `John Doe`. Stray byte order marks
/// are removed first. Returns `None` when there is no colon or the name
/// is blank.
pub fn parse_patient_name(line: &str) -> Option<String> {
    let clean = line.replace(BOM, "");
    let (_, rest) = clean.split_once(':')?;
    let name = rest.split(',').next().unwrap_or("").trim();
    non_empty(name)
}

/// Extracts the patient ID from a `Patient ID:` line
pub fn parse_patient_id(line: &str) -> Option<String> {
    let (_, rest) = line.split_once(':')?;
    non_empty(rest.trim())
}

/// Extracts the prescribed total dose in Gy from a `Total dose [Gy]:` line
///
/// Returns `None` when the line has no number after the marker or the
/// number does not parse (e.g. `60.0.1`).
pub fn parse_total_dose(line: &str) -> Option<f64> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"Total dose \[Gy\]:\s*([\d.]+)").expect("Failed to compile regex")
    });

    re.captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patient_name() {
        assert_eq!(
            parse_patient_name("Patient Name: John Doe, M"),
            Some("John Doe".to_string())
        );
        assert_eq!(
            parse_patient_name("Patient Name:Jane"),
            Some("Jane".to_string())
        );
    }

    #[test]
    fn test_parse_patient_name_with_bom() {
        assert_eq!(
            parse_patient_name("\u{feff}Patient Name: John Doe, M"),
            Some("John Doe".to_string())
        );
    }

    #[test]
    fn test_parse_patient_name_missing() {
        assert_eq!(parse_patient_name("Patient Name"), None);
        assert_eq!(parse_patient_name("Patient Name: , M"), None);
    }

    #[test]
    fn test_parse_patient_name_keeps_later_colons() {
        assert_eq!(
            parse_patient_name("Patient Name: Doe: John, M"),
            Some("Doe: John".to_string())
        );
    }

    #[test]
    fn test_parse_patient_id() {
        assert_eq!(
            parse_patient_id("Patient ID: 12345"),
            Some("12345".to_string())
        );
        assert_eq!(
            parse_patient_id("Patient ID: AB:77"),
            Some("AB:77".to_string())
        );
        assert_eq!(parse_patient_id("Patient ID"), None);
        assert_eq!(parse_patient_id("Patient ID:   "), None);
    }

    #[test]
    fn test_parse_total_dose() {
        assert_eq!(parse_total_dose("Total dose [Gy]: 60.0"), Some(60.0));
        assert_eq!(parse_total_dose("Total dose [Gy]:54"), Some(54.0));
        assert_eq!(
            parse_total_dose("Plan: X   Total dose [Gy]: 70.2 (2.0 x 35)"),
            Some(70.2)
        );
    }

    #[test]
    fn test_parse_total_dose_invalid() {
        assert_eq!(parse_total_dose("Total dose [Gy]: n/a"), None);
        assert_eq!(parse_total_dose("Total dose [cGy]: 6000"), None);
        assert_eq!(parse_total_dose("Total dose [Gy]: 60.0.1"), None);
    }
}
