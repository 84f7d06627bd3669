use crate::api::ParseResult;
use crate::cli::format::{
    format_total_dose, or_not_available, quick_metrics, MetricGroup, NOT_AVAILABLE,
};
use crate::types::StructureCategory;
use std::fmt;

/// Text report formatter for a parsed DVH report
pub struct TextReport<'a> {
    result: &'a ParseResult,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(result: &'a ParseResult) -> Self {
        Self { result }
    }

    fn write_structure(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        writeln!(f, "{} [{}]", name, StructureCategory::classify(name))?;

        match self.result.curve(name) {
            Some(curve) => match curve.dose_range() {
                Some((lo, hi)) => writeln!(
                    f,
                    "  Curve:       {} rows, {:.1}-{:.1} cGy",
                    curve.len(),
                    lo,
                    hi
                )?,
                None => writeln!(f, "  Curve:       {} rows", curve.len())?,
            },
            None => writeln!(f, "  Curve:       {}", NOT_AVAILABLE)?,
        }

        let stats = self.result.stats_for(name);
        for (label, value) in quick_metrics(stats) {
            writeln!(f, "  {:<12} {}", format!("{}:", label), value)?;
        }

        if let Some(stats) = stats {
            for group in MetricGroup::ALL {
                let entries = group.entries(name, stats);
                if entries.is_empty() {
                    continue;
                }
                writeln!(f, "  {}", group.title())?;
                for (label, value) in entries {
                    writeln!(f, "    {:<25} {}", format!("{}:", label), value)?;
                }
            }
        }
        writeln!(f)
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metadata = self.result.metadata();

        writeln!(f, "Patient Details")?;
        writeln!(f, "===============")?;
        writeln!(f)?;
        writeln!(f, "Name:           {}", or_not_available(metadata.name.as_deref()))?;
        writeln!(f, "ID:             {}", or_not_available(metadata.id.as_deref()))?;
        writeln!(f, "Total Dose:     {}", format_total_dose(metadata.total_dose_gy))?;
        writeln!(f)?;

        let names: Vec<&str> = self.result.structure_names().collect();
        writeln!(f, "Structures ({})", names.len())?;
        writeln!(f, "--------------")?;
        writeln!(f)?;

        if names.is_empty() {
            writeln!(f, "No structures found")?;
        }
        for name in names {
            self.write_structure(f, name)?;
        }

        Ok(())
    }
}
