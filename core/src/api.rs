use log::info;
use std::path::Path;

use crate::error::Result;
use crate::parser::ReportParser;
use crate::types::{
    DoseVolumeCurve, LabelMap, ParserConfig, ReportMetadata, StructureFilter, StructureStats,
};

/// UTF-8 byte order mark
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes a report payload as UTF-8, dropping one leading byte order mark
///
/// # Errors
///
/// Returns [`DvhError::Decode`](crate::DvhError::Decode) if the bytes are
/// not valid UTF-8.
pub fn decode_report(bytes: &[u8]) -> Result<&str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(std::str::from_utf8(bytes)?)
}

/// Main entry point for reading DVH text exports
///
/// # Example
///
/// ```
/// use dvhstat_core::DvhReader;
///
/// let report = "\u{feff}Patient Name: John Doe, M\n\
///               Patient ID: 12345\n\
///               Total dose [Gy]: 60.0\n\
///               Structure: PTV1\n\
///               6200 0.5 2\n\
///               6000 12.5 50\n\
///               5800 24.5 98\n";
///
/// let result = DvhReader::parse_bytes(report.as_bytes()).unwrap();
///
/// assert_eq!(result.metadata().id.as_deref(), Some("12345"));
/// assert_eq!(result.metadata().total_dose_gy, Some(60.0));
/// let stats = result.stats_for("PTV1").unwrap();
/// assert_eq!(stats.get("Homogeneity Index").map(String::as_str), Some("0.07"));
/// ```
pub struct DvhReader;

impl DvhReader {
    /// Parses a raw report payload with the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid UTF-8. Malformed lines
    /// never fail the parse.
    pub fn parse_bytes(bytes: &[u8]) -> Result<ParseResult> {
        Self::parse_bytes_with_config(bytes, ParserConfig::default())
    }

    /// Parses a raw report payload with a custom configuration
    pub fn parse_bytes_with_config(bytes: &[u8], config: ParserConfig) -> Result<ParseResult> {
        let text = decode_report(bytes)?;
        Ok(Self::parse_str_with_config(text, config))
    }

    /// Parses already decoded report text
    pub fn parse_str(text: &str) -> ParseResult {
        Self::parse_str_with_config(text, ParserConfig::default())
    }

    /// Parses already decoded report text with a custom configuration
    pub fn parse_str_with_config(text: &str, config: ParserConfig) -> ParseResult {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        ReportParser::new(config).parse(text)
    }

    /// Reads and parses a report file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseResult> {
        Self::parse_file_with_config(path, ParserConfig::default())
    }

    /// Reads and parses a report file with a custom configuration
    pub fn parse_file_with_config(path: impl AsRef<Path>, config: ParserConfig) -> Result<ParseResult> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let result = Self::parse_bytes_with_config(&bytes, config)?;
        info!(
            "Parsed {}: {} structures, {} curves",
            path.display(),
            result.structure_names().count(),
            result.curves().len()
        );
        Ok(result)
    }
}

/// Structured content of one DVH report
///
/// Built once by the parser and read-only afterwards. Structure maps keep
/// the order in which structures first appear in the report.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    metadata: ReportMetadata,
    structures: Vec<String>,
    curves: LabelMap<DoseVolumeCurve>,
    stats: LabelMap<StructureStats>,
}

impl ParseResult {
    pub(crate) fn new(
        metadata: ReportMetadata,
        structures: Vec<String>,
        curves: LabelMap<DoseVolumeCurve>,
        stats: LabelMap<StructureStats>,
    ) -> Self {
        Self {
            metadata,
            structures,
            curves,
            stats,
        }
    }

    /// Patient details
    pub fn metadata(&self) -> &ReportMetadata {
        &self.metadata
    }

    /// Names of all structures declared in the report, in report order
    pub fn structure_names(&self) -> impl Iterator<Item = &str> {
        self.structures.iter().map(String::as_str)
    }

    /// Curves keyed by structure name
    pub fn curves(&self) -> &LabelMap<DoseVolumeCurve> {
        &self.curves
    }

    /// Statistics keyed by structure name
    pub fn stats(&self) -> &LabelMap<StructureStats> {
        &self.stats
    }

    /// Curve of one structure
    pub fn curve(&self, structure: &str) -> Option<&DoseVolumeCurve> {
        self.curves.get(structure)
    }

    /// Statistics of one structure
    pub fn stats_for(&self, structure: &str) -> Option<&StructureStats> {
        self.stats.get(structure)
    }

    /// Returns a copy holding only the structures that pass `filter`
    ///
    /// Metadata is kept as is.
    pub fn filtered(&self, filter: &StructureFilter) -> ParseResult {
        let mut result = self.clone();
        if filter.is_permissive() {
            return result;
        }
        result.structures.retain(|name| filter.matches(name));
        result.curves.retain(|name, _| filter.matches(name));
        result.stats.retain(|name, _| filter.matches(name));
        result
    }

    /// Serializes the result as pretty-printed JSON
    ///
    /// NaN table values are written as `null`.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restores a result previously written by [`ParseResult::to_json`]
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
