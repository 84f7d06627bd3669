use std::fmt;

/// Patient details from the report header
///
/// Fields that never appear in the report stay `None`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportMetadata {
    /// Patient name, without the trailing ", <suffix>" part
    pub name: Option<String>,

    /// Patient ID
    pub id: Option<String>,

    /// Prescribed total dose in Gy
    pub total_dose_gy: Option<f64>,
}

impl ReportMetadata {
    /// Returns true when no header field was found
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.id.is_none() && self.total_dose_gy.is_none()
    }
}

impl fmt::Display for ReportMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.name.as_deref().unwrap_or("unknown"),
            self.id.as_deref().unwrap_or("unknown")
        )
    }
}
