use log::debug;

use crate::extraction::markers::HOMOGENEITY_INDEX;
use crate::types::{DoseVolumeCurve, LabelMap, StructureStats};

/// Checks if a structure name contains the target marker (case-insensitive)
pub fn is_target_structure(name: &str, marker: &str) -> bool {
    name.to_uppercase().contains(&marker.to_uppercase())
}

/// Computes the Homogeneity Index `(D2 - D98) / D50` of a curve
///
/// Dx is the dose in Gy of the row whose relative volume is nearest to
/// x percent. Returns `None` when the curve has no usable volumes, when a
/// dose is not finite, or when D50 is zero.
///
/// # Example
///
/// ```
/// use dvhstat_core::analysis::homogeneity_index;
/// use dvhstat_core::{DoseVolumeCurve, DvhRow};
///
/// let curve = DoseVolumeCurve::new(vec![
///     DvhRow::new(6200.0, 0.5, 2.0),
///     DvhRow::new(5800.0, 24.5, 98.0),
///     DvhRow::new(6000.0, 12.5, 50.0),
/// ]);
/// let hi = homogeneity_index(&curve).unwrap();
/// assert_eq!(format!("{:.2}", hi), "0.07");
/// ```
pub fn homogeneity_index(curve: &DoseVolumeCurve) -> Option<f64> {
    let d2 = dose_gy_at_volume(curve, 2.0)?;
    let d98 = dose_gy_at_volume(curve, 98.0)?;
    let d50 = dose_gy_at_volume(curve, 50.0)?;

    if d50 == 0.0 {
        return None;
    }
    Some((d2 - d98) / d50)
}

fn dose_gy_at_volume(curve: &DoseVolumeCurve, percent: f64) -> Option<f64> {
    curve
        .nearest_to_volume_percent(percent)
        .map(|row| row.dose_gy())
        .filter(|dose| dose.is_finite())
}

/// Adds a `Homogeneity Index` entry to the stats of every target structure
///
/// Values are formatted with two decimals. Structures whose index cannot
/// be computed get no entry.
pub fn apply_homogeneity_index(
    curves: &LabelMap<DoseVolumeCurve>,
    stats: &mut LabelMap<StructureStats>,
    target_marker: &str,
) {
    for (name, curve) in curves.iter() {
        if !is_target_structure(name, target_marker) {
            continue;
        }

        match homogeneity_index(curve) {
            Some(hi) => {
                debug!("Homogeneity Index for '{}': {:.4}", name, hi);
                stats
                    .get_or_insert_with(name, StructureStats::new)
                    .insert(HOMOGENEITY_INDEX, format!("{:.2}", hi));
            }
            None => debug!("Skipping Homogeneity Index for '{}'", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DvhRow;

    fn curve(rows: &[(f64, f64)]) -> DoseVolumeCurve {
        DoseVolumeCurve::new(
            rows.iter()
                .map(|&(dose, pct)| DvhRow::new(dose, 0.0, pct))
                .collect(),
        )
    }

    #[test]
    fn test_is_target_structure() {
        assert!(is_target_structure("PTV_60", "PTV"));
        assert!(is_target_structure("zptv_boost", "PTV"));
        assert!(!is_target_structure("GTV", "PTV"));
        assert!(is_target_structure("CTV_1", "ctv"));
    }

    #[test]
    fn test_homogeneity_index_nearest_rows() {
        let c = curve(&[(6300.0, 0.0), (6200.0, 3.0), (6000.0, 49.0), (5800.0, 97.0), (5000.0, 100.0)]);
        let hi = homogeneity_index(&c).unwrap();
        assert!((hi - 4.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_homogeneity_index_zero_d50() {
        let c = curve(&[(6200.0, 2.0), (0.0, 50.0), (5800.0, 98.0)]);
        assert!(homogeneity_index(&c).is_none());
    }

    #[test]
    fn test_homogeneity_index_empty_or_nan() {
        assert!(homogeneity_index(&DoseVolumeCurve::default()).is_none());
        assert!(homogeneity_index(&curve(&[(6000.0, f64::NAN)])).is_none());
        assert!(homogeneity_index(&curve(&[(f64::NAN, 50.0)])).is_none());
    }

    #[test]
    fn test_single_row_curve() {
        let c = curve(&[(6000.0, 100.0)]);
        assert_eq!(homogeneity_index(&c), Some(0.0));
    }

    #[test]
    fn test_apply_only_to_targets() {
        let mut curves = LabelMap::new();
        curves.insert("PTV1", curve(&[(6200.0, 2.0), (5800.0, 98.0), (6000.0, 50.0)]));
        curves.insert("Heart", curve(&[(3000.0, 2.0), (100.0, 98.0), (1000.0, 50.0)]));
        curves.insert("ptv_zero", curve(&[(0.0, 50.0)]));

        let mut stats: LabelMap<StructureStats> = LabelMap::new();
        stats
            .get_or_insert_with("PTV1", StructureStats::new)
            .insert("Volume [cm³]", "120.5".to_string());

        apply_homogeneity_index(&curves, &mut stats, "PTV");

        let ptv = stats.get("PTV1").unwrap();
        assert_eq!(ptv.get(HOMOGENEITY_INDEX).map(String::as_str), Some("0.07"));
        assert_eq!(ptv.get("Volume [cm³]").map(String::as_str), Some("120.5"));
        assert!(stats.get("Heart").is_none());
        assert!(stats.get("ptv_zero").is_none());
    }

    #[test]
    fn test_apply_creates_stats_entry() {
        let mut curves = LabelMap::new();
        curves.insert("PTV_2", curve(&[(5500.0, 2.0), (4500.0, 98.0), (5000.0, 50.0)]));

        let mut stats = LabelMap::new();
        apply_homogeneity_index(&curves, &mut stats, "PTV");

        assert_eq!(
            stats
                .get("PTV_2")
                .and_then(|s| s.get(HOMOGENEITY_INDEX))
                .map(String::as_str),
            Some("0.20")
        );
    }
}
