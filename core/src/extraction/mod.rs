//! Line-level extractors for the DVH text export
//!
//! Each extractor understands one kind of report line; the orchestration
//! (which line goes where, and the per-structure state) lives in
//! [`crate::parser`].

pub mod curve;
pub mod markers;
pub mod metadata;
pub mod stats;

pub use curve::{split_row_tokens, CurveBuilder};
pub use metadata::{parse_patient_id, parse_patient_name, parse_total_dose};
pub use stats::{extract_stats_window, ScalarMetric};
