use regex::Regex;
use std::sync::OnceLock;

use super::markers::{CONFORMITY_INDEX, GRADIENT_MEASURE};

/// Reads `key: value` pairs from a fixed window of lines
///
/// The window starts at `start` (the statistics marker itself) and spans
/// `window` lines, clipped at the end of input. A line contributes only
/// if splitting it on `:` yields exactly two parts. The window is purely
/// positional and may reach into the next structure's lines.
pub fn extract_stats_window(lines: &[&str], start: usize, window: usize) -> Vec<(String, String)> {
    let end = start.saturating_add(window).min(lines.len());
    lines
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .filter_map(|line| split_key_value(line.trim()))
        .collect()
}

fn split_key_value(line: &str) -> Option<(String, String)> {
    let mut parts = line.split(':');
    let key = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((key.trim().to_string(), value.trim().to_string()))
}

/// Single-line plan quality metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarMetric {
    ConformityIndex,
    GradientMeasure,
}

impl ScalarMetric {
    /// All metrics, in dispatch order
    pub const ALL: [ScalarMetric; 2] = [ScalarMetric::ConformityIndex, ScalarMetric::GradientMeasure];

    /// Line prefix and stats key of the metric
    pub fn label(&self) -> &'static str {
        match self {
            ScalarMetric::ConformityIndex => CONFORMITY_INDEX,
            ScalarMetric::GradientMeasure => GRADIENT_MEASURE,
        }
    }

    /// Returns the metric introduced by `line`, if any
    pub fn detect(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|metric| line.starts_with(metric.label()))
    }

    /// Extracts the metric value, verbatim, from its line
    pub fn extract(&self, line: &str) -> Option<String> {
        static CONFORMITY: OnceLock<Regex> = OnceLock::new();
        static GRADIENT: OnceLock<Regex> = OnceLock::new();
        let re = match self {
            ScalarMetric::ConformityIndex => CONFORMITY.get_or_init(|| {
                Regex::new(r"Conformity Index\s*:\s*([\d.]+)").expect("Failed to compile regex")
            }),
            ScalarMetric::GradientMeasure => GRADIENT.get_or_init(|| {
                Regex::new(r"Gradient Measure \[cm\]\s*:\s*([\d.]+)")
                    .expect("Failed to compile regex")
            }),
        };

        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}
