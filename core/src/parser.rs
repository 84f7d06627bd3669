//! Single-pass line dispatcher for DVH text exports
//!
//! The parser walks the report once, classifying each trimmed line and
//! routing it to the matching extractor. The only state carried between
//! lines is the name of the open structure and the table rows collected
//! for it; both belong to one [`ReportParser`] value, created per parse.

use log::{debug, trace};

use crate::analysis::apply_homogeneity_index;
use crate::api::ParseResult;
use crate::extraction::markers::{
    BOM, PATIENT_ID, PATIENT_NAME, STRUCTURE, TOTAL_DOSE, VOLUME_STATS,
};
use crate::extraction::{
    extract_stats_window, parse_patient_id, parse_patient_name, parse_total_dose, CurveBuilder,
    ScalarMetric,
};
use crate::types::{DoseVolumeCurve, LabelMap, ParserConfig, ReportMetadata, StructureStats};

/// Kind of a report line, in dispatch priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    PatientName,
    PatientId,
    TotalDose,
    Structure,
    StatsBlock,
    DataRow,
    Scalar(ScalarMetric),
    Other,
}

impl LineKind {
    /// Classifies a trimmed line; the first matching rule wins
    pub fn classify(line: &str) -> Self {
        if line.trim_start_matches(BOM).starts_with(PATIENT_NAME) {
            LineKind::PatientName
        } else if line.starts_with(PATIENT_ID) {
            LineKind::PatientId
        } else if line.contains(TOTAL_DOSE) {
            LineKind::TotalDose
        } else if line.starts_with(STRUCTURE) {
            LineKind::Structure
        } else if line.starts_with(VOLUME_STATS) {
            LineKind::StatsBlock
        } else if line.starts_with(|c: char| c.is_ascii_digit()) {
            LineKind::DataRow
        } else if let Some(metric) = ScalarMetric::detect(line) {
            LineKind::Scalar(metric)
        } else {
            LineKind::Other
        }
    }
}

/// Splits text into lines on `\n`, `\r\n` or a lone `\r`
///
/// A trailing line break does not produce an empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Extracts the structure name from a `Structure:` line
///
/// The name is the field between the first and second colon. Returns
/// `None` for a blank name.
fn parse_structure_name(line: &str) -> Option<String> {
    let name = line.split(':').nth(1).unwrap_or("").trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Stateful report parser
///
/// # Example
///
/// ```
/// use dvhstat_core::parser::ReportParser;
/// use dvhstat_core::ParserConfig;
///
/// let report = "Patient Name: John Doe, M\n\
///               Structure: PTV_60\n\
///               6000 10.0 100\n\
///               5000 5.0 50\n";
///
/// let result = ReportParser::new(ParserConfig::default()).parse(report);
/// assert_eq!(result.metadata().name.as_deref(), Some("John Doe"));
/// assert_eq!(result.curve("PTV_60").unwrap().len(), 2);
/// ```
#[derive(Debug)]
pub struct ReportParser {
    config: ParserConfig,
    current_structure: Option<String>,
    pending: CurveBuilder,
    metadata: ReportMetadata,
    structures: Vec<String>,
    curves: LabelMap<DoseVolumeCurve>,
    stats: LabelMap<StructureStats>,
}

impl ReportParser {
    /// Creates a parser with empty state
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            current_structure: None,
            pending: CurveBuilder::new(),
            metadata: ReportMetadata::default(),
            structures: Vec::new(),
            curves: LabelMap::new(),
            stats: LabelMap::new(),
        }
    }

    /// Parses decoded report text, consuming the parser
    pub fn parse(mut self, text: &str) -> ParseResult {
        let lines: Vec<&str> = split_lines(text).into_iter().map(str::trim).collect();

        for (idx, line) in lines.iter().enumerate() {
            self.dispatch(&lines, idx, line);
        }
        self.finish_structure();

        if self.config.compute_homogeneity {
            apply_homogeneity_index(&self.curves, &mut self.stats, &self.config.target_marker);
        }

        debug!(
            "Parsed {} lines: {} structures, {} curves, {} stat blocks",
            lines.len(),
            self.structures.len(),
            self.curves.len(),
            self.stats.len()
        );

        ParseResult::new(self.metadata, self.structures, self.curves, self.stats)
    }

    fn dispatch(&mut self, lines: &[&str], idx: usize, line: &str) {
        match LineKind::classify(line) {
            LineKind::PatientName => self.metadata.name = parse_patient_name(line),
            LineKind::PatientId => self.metadata.id = parse_patient_id(line),
            LineKind::TotalDose => {
                if let Some(dose) = parse_total_dose(line) {
                    self.metadata.total_dose_gy = Some(dose);
                }
            }
            LineKind::Structure => {
                self.finish_structure();
                self.current_structure = parse_structure_name(line);
                if let Some(name) = &self.current_structure {
                    if !self.structures.contains(name) {
                        self.structures.push(name.clone());
                    }
                }
            }
            LineKind::StatsBlock => {
                let entries = extract_stats_window(lines, idx, self.config.stats_window);
                match &self.current_structure {
                    Some(name) => {
                        debug!("Read {} statistics for '{}'", entries.len(), name);
                        self.stats
                            .get_or_insert_with(name, StructureStats::new)
                            .extend(entries);
                    }
                    None => debug!("Discarding statistics block at line {}", idx + 1),
                }
            }
            LineKind::DataRow => {
                if self.current_structure.is_none() {
                    trace!("Discarding table row outside a structure: {}", line);
                } else if !self.pending.push_line(line) {
                    trace!("Skipping short table row: {}", line);
                }
            }
            LineKind::Scalar(metric) => {
                match (&self.current_structure, metric.extract(line)) {
                    (Some(name), Some(value)) => {
                        self.stats
                            .get_or_insert_with(name, StructureStats::new)
                            .insert(metric.label(), value);
                    }
                    _ => trace!("Ignoring metric line: {}", line),
                }
            }
            LineKind::Other => trace!("Ignoring line: {}", line),
        }
    }

    /// Stores the rows of the open structure as its curve
    fn finish_structure(&mut self) {
        let Some(name) = &self.current_structure else {
            return;
        };
        if !self.pending.has_rows() {
            return;
        }

        let curve = self.pending.finish();
        debug!("Finalized curve for '{}' with {} rows", name, curve.len());
        if self.curves.insert(name.as_str(), curve).is_some() {
            debug!("Structure '{}' appeared again, replacing its curve", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::markers::{CONFORMITY_INDEX, GRADIENT_MEASURE, HOMOGENEITY_INDEX};
    use rstest::rstest;

    fn parse(text: &str) -> ParseResult {
        ReportParser::new(ParserConfig::default()).parse(text)
    }

    fn stat<'a>(result: &'a ParseResult, structure: &str, key: &str) -> Option<&'a str> {
        result
            .stats_for(structure)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    #[rstest]
    #[case("Patient Name: John Doe, M", LineKind::PatientName)]
    #[case("\u{feff}Patient Name: John Doe", LineKind::PatientName)]
    #[case("Patient ID: 12345", LineKind::PatientId)]
    #[case("Total dose [Gy]: 60.0", LineKind::TotalDose)]
    #[case("Plan sum - Total dose [Gy]: 60.0", LineKind::TotalDose)]
    #[case("Structure: PTV_60", LineKind::Structure)]
    #[case("Volume [cm³]: 120.5", LineKind::StatsBlock)]
    #[case("6000 10.0 100", LineKind::DataRow)]
    #[case("0,0,0", LineKind::DataRow)]
    #[case("Conformity Index: 0.98", LineKind::Scalar(ScalarMetric::ConformityIndex))]
    #[case("Gradient Measure [cm]: 0.45", LineKind::Scalar(ScalarMetric::GradientMeasure))]
    #[case("abc def", LineKind::Other)]
    #[case("Mean Dose [%]: 95.3", LineKind::Other)]
    #[case("", LineKind::Other)]
    #[case("Structure PTV", LineKind::Other)]
    fn test_classify(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(LineKind::classify(line), expected);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\r\nc\rd\n"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_metadata_scenario() {
        let result = parse("Patient Name: John Doe, M\nPatient ID: 12345\nTotal dose [Gy]: 60.0\n");
        let metadata = result.metadata();
        assert_eq!(metadata.name.as_deref(), Some("John Doe"));
        assert_eq!(metadata.id.as_deref(), Some("12345"));
        assert_eq!(metadata.total_dose_gy, Some(60.0));
    }

    #[test]
    fn test_missing_metadata_stays_absent() {
        let result = parse("Patient ID\nTotal dose [Gy]: unknown\n");
        assert!(result.metadata().is_empty());
    }

    #[test]
    fn test_curve_scenario() {
        let result = parse(
            "Structure: PTV_60\n6000 10.0 100\n5000 5.0 50\n4000 2.0 20\nStructure: Heart\n",
        );
        let curve = result.curve("PTV_60").unwrap();
        let doses: Vec<f64> = curve.iter().map(|r| r.dose_cgy).collect();
        assert_eq!(doses, vec![6000.0, 5000.0, 4000.0]);
        assert!(result.curve("Heart").is_none());
        assert_eq!(result.curves().len(), 1);
    }

    #[test]
    fn test_last_structure_finalized_at_end() {
        let result = parse("Structure: Heart\n3000 1 100\n10 0.1 1");
        assert_eq!(result.curve("Heart").unwrap().len(), 2);
    }

    #[test]
    fn test_stats_scenario() {
        let mut text = String::from("Structure: PTV_60\nVolume [cm³]: 120.5\n");
        for i in 0..8 {
            text.push_str(&format!("Filler line {}\n", i));
        }
        text.push_str("Mean Dose [%]: 95.3\n");
        text.push_str("Max Dose [%]: 107.1\n");

        let result = parse(&text);
        assert_eq!(stat(&result, "PTV_60", "Volume [cm³]"), Some("120.5"));
        assert_eq!(stat(&result, "PTV_60", "Mean Dose [%]"), Some("95.3"));
        // Eleventh line from the marker is outside the window
        assert_eq!(stat(&result, "PTV_60", "Max Dose [%]"), None);
    }

    #[test]
    fn test_stats_window_crosses_boundary() {
        let result = parse(
            "Structure: Bladder\nVolume [cm³]: 80\nMin Dose [%]: 1.0\nStructure: Rectum\nMax Dose [%]: 90.0\n",
        );
        assert_eq!(stat(&result, "Bladder", "Structure"), Some("Rectum"));
        assert_eq!(stat(&result, "Bladder", "Max Dose [%]"), Some("90.0"));
        assert!(result.stats_for("Rectum").is_none());
    }

    #[test]
    fn test_lines_before_first_structure_are_discarded() {
        let result = parse(
            "Volume [cm³]: 10\nConformity Index: 0.9\n100 1 1\nStructure: Heart\n200 2 2\n",
        );
        assert!(result.stats().is_empty());
        let curve = result.curve("Heart").unwrap();
        assert_eq!(curve.len(), 1);
        assert_eq!(curve.rows()[0].dose_cgy, 200.0);
    }

    #[test]
    fn test_scalar_metrics() {
        let result = parse(
            "Structure: PTV_60\nConformity Index: 0.98\nGradient Measure [cm]: 0.45\nConformity Index: n/a\n",
        );
        assert_eq!(stat(&result, "PTV_60", CONFORMITY_INDEX), Some("0.98"));
        assert_eq!(stat(&result, "PTV_60", GRADIENT_MEASURE), Some("0.45"));
    }

    #[test]
    fn test_garbage_row_skipped() {
        let result = parse("Structure: Heart\nabc def\n100 1\n300 2 50\n");
        let curve = result.curve("Heart").unwrap();
        assert_eq!(curve.len(), 1);
        assert_eq!(curve.rows()[0].dose_cgy, 300.0);
    }

    #[test]
    fn test_boundary_without_rows_produces_no_curve() {
        let result = parse("Structure: A\nStructure: B\n1 2 3\nStructure: C\n");
        assert_eq!(result.curves().keys().collect::<Vec<_>>(), ["B"]);
        assert_eq!(result.structure_names().collect::<Vec<_>>(), ["A", "B", "C"]);
    }

    #[test]
    fn test_duplicate_structure_replaces_curve_and_merges_stats() {
        let result = parse(
            "Structure: Heart\n100 1 1\nConformity Index: 0.5\n\
             Structure: Heart\n200 2 2\n300 3 3\nGradient Measure [cm]: 0.7\n",
        );
        let curve = result.curve("Heart").unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.rows()[0].dose_cgy, 200.0);
        assert_eq!(stat(&result, "Heart", CONFORMITY_INDEX), Some("0.5"));
        assert_eq!(stat(&result, "Heart", GRADIENT_MEASURE), Some("0.7"));
        assert_eq!(result.structure_names().count(), 1);
    }

    #[test]
    fn test_blank_structure_name_closes_structure() {
        let result = parse("Structure: Heart\n100 1 1\nStructure:\n200 2 2\n");
        assert_eq!(result.curves().len(), 1);
        assert_eq!(result.curve("Heart").unwrap().len(), 1);
    }

    #[test]
    fn test_homogeneity_index_added() {
        let result = parse(
            "Structure: PTV1\n6200 1 2\n5800 49 98\n6000 25 50\nStructure: Lung\n6200 1 2\n5800 49 98\n6000 25 50\n",
        );
        assert_eq!(stat(&result, "PTV1", HOMOGENEITY_INDEX), Some("0.07"));
        assert_eq!(stat(&result, "Lung", HOMOGENEITY_INDEX), None);
    }

    #[test]
    fn test_homogeneity_disabled() {
        let config = ParserConfig::default().compute_homogeneity(false);
        let result = ReportParser::new(config).parse("Structure: PTV1\n6200 1 2\n5800 49 98\n6000 25 50\n");
        assert!(result.stats_for("PTV1").is_none());
    }

    #[test]
    fn test_custom_stats_window() {
        let config = ParserConfig::default().with_stats_window(2);
        let result = ReportParser::new(config)
            .parse("Structure: A\nVolume [cm³]: 1\nMin Dose [%]: 2\nMax Dose [%]: 3\n");
        let stats = result.stats_for("A").unwrap();
        assert_eq!(stats.len(), 2);
        assert!(stats.get("Max Dose [%]").is_none());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "Patient Name: A, B\nStructure: PTV\n6000 x 100\n5000 1 n/a\nVolume [cm³]: 3\n";
        assert_eq!(parse(text), parse(text));
    }
}
