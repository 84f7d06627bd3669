use crate::extraction::markers::{DEFAULT_STATS_WINDOW, DEFAULT_TARGET_MARKER};

/// Configuration for the report parser
///
/// The defaults reproduce the behavior expected for exports of the
/// treatment planning system; the builders exist for reports that lay out
/// their statistics differently or name targets another way.
///
/// # Example
///
/// ```
/// use dvhstat_core::ParserConfig;
///
/// let config = ParserConfig::default()
///     .with_stats_window(12)
///     .compute_homogeneity(false);
///
/// assert_eq!(config.stats_window, 12);
/// assert_eq!(config.target_marker, "PTV");
/// assert!(!config.compute_homogeneity);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Number of lines read from a statistics marker, the marker included
    pub stats_window: usize,

    /// Name fragment (case-insensitive) marking structures that receive
    /// a Homogeneity Index
    pub target_marker: String,

    /// Whether to derive the Homogeneity Index after parsing
    pub compute_homogeneity: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            stats_window: DEFAULT_STATS_WINDOW,
            target_marker: DEFAULT_TARGET_MARKER.to_string(),
            compute_homogeneity: true,
        }
    }
}

impl ParserConfig {
    /// Builder: Set the statistics window size
    pub fn with_stats_window(mut self, lines: usize) -> Self {
        self.stats_window = lines;
        self
    }

    /// Builder: Set the target structure marker
    pub fn with_target_marker(mut self, marker: impl Into<String>) -> Self {
        self.target_marker = marker.into();
        self
    }

    /// Builder: Enable or disable the Homogeneity Index pass
    pub fn compute_homogeneity(mut self, compute: bool) -> Self {
        self.compute_homogeneity = compute;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.stats_window, 10);
        assert_eq!(config.target_marker, "PTV");
        assert!(config.compute_homogeneity);
    }

    #[test]
    fn test_builder_chain() {
        let config = ParserConfig::default()
            .with_stats_window(4)
            .with_target_marker("CTV")
            .compute_homogeneity(false);

        assert_eq!(config.stats_window, 4);
        assert_eq!(config.target_marker, "CTV");
        assert!(!config.compute_homogeneity);
    }
}
