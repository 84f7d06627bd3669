//! Display helpers shared by the text report and the Python bindings

use crate::analysis::is_target_structure;
use crate::extraction::markers::{
    CONFORMITY_INDEX, DEFAULT_TARGET_MARKER, EQUIV_SPHERE_DIAM, GRADIENT_MEASURE,
    HOMOGENEITY_INDEX, MAX_DOSE, MEAN_DOSE, MEDIAN_DOSE, MIN_DOSE, MODAL_DOSE, STD_DOSE, VOLUME,
};
use crate::types::StructureStats;

/// Placeholder for values missing from the report
pub const NOT_AVAILABLE: &str = "N/A";

/// Returns the value or the "not available" placeholder
pub fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// Appends `%` unless the value already ends with one
pub fn with_percent_suffix(value: &str) -> String {
    if value.ends_with('%') {
        value.to_string()
    } else {
        format!("{}%", value)
    }
}

/// Formats the prescribed dose as `60.0 Gy`, or `N/A Gy` when absent
pub fn format_total_dose(dose: Option<f64>) -> String {
    match dose {
        Some(d) if d.fract() == 0.0 => format!("{:.1} Gy", d),
        Some(d) => format!("{} Gy", d),
        None => format!("{} Gy", NOT_AVAILABLE),
    }
}

/// Summary figures shown for every structure: volume, mean and max dose
pub fn quick_metrics(stats: Option<&StructureStats>) -> [(&'static str, String); 3] {
    let get = |key: &str| stats.and_then(|s| s.get(key)).map(String::as_str);
    [
        ("Volume", format!("{} cm³", or_not_available(get(VOLUME)))),
        (
            "Mean Dose",
            get(MEAN_DOSE).map_or_else(|| NOT_AVAILABLE.to_string(), with_percent_suffix),
        ),
        (
            "Max Dose",
            get(MAX_DOSE).map_or_else(|| NOT_AVAILABLE.to_string(), with_percent_suffix),
        ),
    ]
}

/// Groups of statistics shown together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricGroup {
    Dose,
    Volume,
    Other,
}

impl MetricGroup {
    pub const ALL: [MetricGroup; 3] = [MetricGroup::Dose, MetricGroup::Volume, MetricGroup::Other];

    /// Heading of the group
    pub fn title(&self) -> &'static str {
        match self {
            MetricGroup::Dose => "Dose Metrics",
            MetricGroup::Volume => "Volume Metrics",
            MetricGroup::Other => "Other Metrics",
        }
    }

    /// `(display label, stats key)` pairs of the group
    pub fn metrics(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            MetricGroup::Dose => &[
                ("Min Dose", MIN_DOSE),
                ("Max Dose", MAX_DOSE),
                ("Mean Dose", MEAN_DOSE),
                ("Median Dose", MEDIAN_DOSE),
                ("Modal Dose", MODAL_DOSE),
                ("STD", STD_DOSE),
            ],
            MetricGroup::Volume => &[
                ("Volume", VOLUME),
                ("Equivalent Sphere Diam.", EQUIV_SPHERE_DIAM),
            ],
            MetricGroup::Other => &[
                ("Conformity Index", CONFORMITY_INDEX),
                ("Gradient Measure", GRADIENT_MEASURE),
                ("Homogeneity Index", HOMOGENEITY_INDEX),
            ],
        }
    }

    /// Present entries of the group, formatted for display
    ///
    /// Dose metrics get a `%` suffix. The Homogeneity Index is only listed
    /// for target structures.
    pub fn entries(&self, structure: &str, stats: &StructureStats) -> Vec<(&'static str, String)> {
        let is_target = is_target_structure(structure, DEFAULT_TARGET_MARKER);
        self.metrics()
            .iter()
            .filter(|(_, key)| *key != HOMOGENEITY_INDEX || is_target)
            .filter_map(|(label, key)| {
                let value = stats.get(key)?;
                let shown = match self {
                    MetricGroup::Dose => with_percent_suffix(value),
                    _ => value.clone(),
                };
                Some((*label, shown))
            })
            .collect()
    }
}
