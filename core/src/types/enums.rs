use std::fmt;

/// Name fragments identifying target volumes
pub const TARGET_MARKERS: [&str; 3] = ["PTV", "GTV", "CTV"];

/// Name fragments identifying organs at risk
pub const ORGAN_AT_RISK_MARKERS: [&str; 4] = ["Lung", "Heart", "Spinal Cord", "Esophagus"];

/// Coarse structure taxonomy used to filter report structures
///
/// Classification is a case-sensitive substring match of the structure
/// name against a small set of fragments. A name may match both the
/// target and the organ-at-risk fragments (e.g. `PTV_Lung`); it then
/// belongs to both categories for filtering and [`classify`] reports
/// it as a target.
///
/// [`classify`]: StructureCategory::classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum StructureCategory {
    /// PTV, GTV, CTV
    Target,
    /// Lung, heart, spinal cord, esophagus
    OrganAtRisk,
    /// Everything else
    Other,
}

impl StructureCategory {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            StructureCategory::Target => "targets",
            StructureCategory::OrganAtRisk => "oars",
            StructureCategory::Other => "other",
        }
    }

    /// Name fragments that place a structure in this category
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            StructureCategory::Target => &TARGET_MARKERS,
            StructureCategory::OrganAtRisk => &ORGAN_AT_RISK_MARKERS,
            StructureCategory::Other => &[],
        }
    }

    /// Checks whether a structure name belongs to this category
    pub fn matches(&self, name: &str) -> bool {
        match self {
            StructureCategory::Other => {
                !StructureCategory::Target.matches(name)
                    && !StructureCategory::OrganAtRisk.matches(name)
            }
            _ => self.markers().iter().any(|marker| name.contains(marker)),
        }
    }

    /// Returns the first category a structure name belongs to
    pub fn classify(name: &str) -> Self {
        if StructureCategory::Target.matches(name) {
            StructureCategory::Target
        } else if StructureCategory::OrganAtRisk.matches(name) {
            StructureCategory::OrganAtRisk
        } else {
            StructureCategory::Other
        }
    }

    /// Parses a category from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "target" | "targets" => Some(StructureCategory::Target),
            "oar" | "oars" | "organ-at-risk" => Some(StructureCategory::OrganAtRisk),
            "other" => Some(StructureCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for StructureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("PTV_60", StructureCategory::Target)]
    #[case("GTV", StructureCategory::Target)]
    #[case("CTV_high", StructureCategory::Target)]
    #[case("Lung_L", StructureCategory::OrganAtRisk)]
    #[case("Heart", StructureCategory::OrganAtRisk)]
    #[case("Spinal Cord", StructureCategory::OrganAtRisk)]
    #[case("Esophagus", StructureCategory::OrganAtRisk)]
    #[case("BODY", StructureCategory::Other)]
    #[case("ptv_lower", StructureCategory::Other)]
    #[case("PTV_Lung", StructureCategory::Target)]
    fn test_classify(#[case] name: &str, #[case] expected: StructureCategory) {
        assert_eq!(StructureCategory::classify(name), expected);
    }

    #[test]
    fn test_overlapping_names_match_both() {
        assert!(StructureCategory::Target.matches("PTV_Lung"));
        assert!(StructureCategory::OrganAtRisk.matches("PTV_Lung"));
        assert!(!StructureCategory::Other.matches("PTV_Lung"));
    }

    #[test]
    fn test_other_matches_unclassified() {
        assert!(StructureCategory::Other.matches("Couch"));
        assert!(!StructureCategory::Other.matches("Heart"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            StructureCategory::from_str("Targets"),
            Some(StructureCategory::Target)
        );
        assert_eq!(
            StructureCategory::from_str("oars"),
            Some(StructureCategory::OrganAtRisk)
        );
        assert_eq!(
            StructureCategory::from_str(" other "),
            Some(StructureCategory::Other)
        );
        assert_eq!(StructureCategory::from_str("bones"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(StructureCategory::OrganAtRisk.to_string(), "oars");
    }
}
