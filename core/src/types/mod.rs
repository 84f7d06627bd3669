//! Core type definitions for DVH reports
//!
//! This module provides the fundamental types used throughout the dvhstat library:
//! - [`ReportMetadata`]: Patient details read from the report header
//! - [`DvhRow`] / [`DoseVolumeCurve`]: Per-structure cumulative dose-volume tables
//! - [`LabelMap`] / [`StructureStats`]: Insertion-ordered label maps
//! - [`StructureCategory`]: Target / organ-at-risk taxonomy used for filtering
//! - [`ParserConfig`]: Tunables for the report parser
//! - [`StructureFilter`]: Search and category filtering of structures

mod config;
mod curve;
mod enums;
mod filter;
mod label_map;
mod metadata;

pub use config::ParserConfig;
pub use curve::{DoseVolumeCurve, DvhRow};
pub use enums::StructureCategory;
pub use filter::StructureFilter;
pub use label_map::LabelMap;
pub use metadata::ReportMetadata;

/// Summary statistics of one structure, metric label to value as authored
pub type StructureStats = LabelMap<String>;
