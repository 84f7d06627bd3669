//! Line markers and metric labels of the DVH text export

// Header markers
pub const PATIENT_NAME: &str = "Patient Name";
pub const PATIENT_ID: &str = "Patient ID";
pub const TOTAL_DOSE: &str = "Total dose";

// Block markers
pub const STRUCTURE: &str = "Structure:";
pub const VOLUME_STATS: &str = "Volume [cm³]";

// Scalar metric labels
pub const CONFORMITY_INDEX: &str = "Conformity Index";
pub const GRADIENT_MEASURE: &str = "Gradient Measure [cm]";

// Derived metric labels
pub const HOMOGENEITY_INDEX: &str = "Homogeneity Index";

// Statistics labels used for display
pub const VOLUME: &str = VOLUME_STATS;
pub const EQUIV_SPHERE_DIAM: &str = "Equiv. Sphere Diam. [cm]";
pub const MIN_DOSE: &str = "Min Dose [%]";
pub const MAX_DOSE: &str = "Max Dose [%]";
pub const MEAN_DOSE: &str = "Mean Dose [%]";
pub const MEDIAN_DOSE: &str = "Median Dose [%]";
pub const MODAL_DOSE: &str = "Modal Dose [%]";
pub const STD_DOSE: &str = "STD [%]";

/// Byte order mark, sometimes left in front of the first header line
pub const BOM: char = '\u{feff}';

pub const DEFAULT_STATS_WINDOW: usize = 10;
pub const DEFAULT_TARGET_MARKER: &str = "PTV";
