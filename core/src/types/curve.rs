/// One row of a cumulative dose-volume table
///
/// Values that could not be read from the report are NaN. Equality treats
/// two NaN values in the same field as equal so that repeated parses of
/// the same report compare equal.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct DvhRow {
    /// Dose in cGy
    #[cfg_attr(feature = "json", serde(with = "nan_as_null"))]
    pub dose_cgy: f64,

    /// Absolute volume in cm³
    #[cfg_attr(feature = "json", serde(with = "nan_as_null"))]
    pub volume_cc: f64,

    /// Relative volume in percent of the structure
    #[cfg_attr(feature = "json", serde(with = "nan_as_null"))]
    pub volume_percent: f64,
}

impl DvhRow {
    /// Creates a new DvhRow
    pub fn new(dose_cgy: f64, volume_cc: f64, volume_percent: f64) -> Self {
        Self {
            dose_cgy,
            volume_cc,
            volume_percent,
        }
    }

    /// Builds a row from raw report tokens
    ///
    /// Tokens that do not parse as numbers become NaN.
    pub fn from_tokens(dose: &str, volume_cc: &str, volume_percent: &str) -> Self {
        Self::new(
            coerce_number(dose),
            coerce_number(volume_cc),
            coerce_number(volume_percent),
        )
    }

    /// Dose in Gy
    pub fn dose_gy(&self) -> f64 {
        self.dose_cgy / 100.0
    }
}

impl PartialEq for DvhRow {
    fn eq(&self, other: &Self) -> bool {
        same_value(self.dose_cgy, other.dose_cgy)
            && same_value(self.volume_cc, other.volume_cc)
            && same_value(self.volume_percent, other.volume_percent)
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn coerce_number(token: &str) -> f64 {
    token.trim().parse().unwrap_or(f64::NAN)
}

/// Cumulative dose-volume curve of a single structure
///
/// Rows keep the order in which they appear in the report, which is
/// usually descending dose.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct DoseVolumeCurve {
    rows: Vec<DvhRow>,
}

impl DoseVolumeCurve {
    /// Creates a curve from rows in source order
    pub fn new(rows: Vec<DvhRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DvhRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DvhRow> {
        self.rows.iter()
    }

    /// Plot series: `(dose_cgy, volume_percent)` pairs in source order
    pub fn dose_volume_points(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|row| (row.dose_cgy, row.volume_percent))
            .collect()
    }

    /// Finds the row whose relative volume is closest to `percent`
    ///
    /// Rows with a NaN relative volume are skipped. On ties the earliest
    /// row wins. Returns `None` when no row has a usable volume.
    ///
    /// # Example
    ///
    /// ```
    /// use dvhstat_core::{DoseVolumeCurve, DvhRow};
    ///
    /// let curve = DoseVolumeCurve::new(vec![
    ///     DvhRow::new(6200.0, 1.0, 2.0),
    ///     DvhRow::new(6000.0, 25.0, 50.0),
    ///     DvhRow::new(5800.0, 49.0, 98.0),
    /// ]);
    /// assert_eq!(curve.nearest_to_volume_percent(47.0).unwrap().dose_cgy, 6000.0);
    /// ```
    pub fn nearest_to_volume_percent(&self, percent: f64) -> Option<&DvhRow> {
        let mut best: Option<(&DvhRow, f64)> = None;
        for row in &self.rows {
            if row.volume_percent.is_nan() {
                continue;
            }
            let distance = (row.volume_percent - percent).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((row, distance)),
            }
        }
        best.map(|(row, _)| row)
    }

    /// Lowest and highest finite dose in cGy
    pub fn dose_range(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .map(|row| row.dose_cgy)
            .filter(|dose| dose.is_finite())
            .fold(None, |range, dose| match range {
                None => Some((dose, dose)),
                Some((lo, hi)) => Some((lo.min(dose), hi.max(dose))),
            })
    }
}

#[cfg(feature = "json")]
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
