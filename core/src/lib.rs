//! Parsing and plan-quality metrics for dose-volume histogram text exports
//!
//! [`DvhReader`] turns a DVH report into a [`ParseResult`]: patient
//! metadata, one [`DoseVolumeCurve`] per structure, and the per-structure
//! statistics found in the report, enriched with a Homogeneity Index for
//! target volumes.

pub mod analysis;
pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod parser;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

pub use api::{decode_report, DvhReader, ParseResult};
pub use cli::report::TextReport;
pub use error::{DvhError, Result};
pub use types::*;
