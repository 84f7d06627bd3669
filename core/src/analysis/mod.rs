//! Metrics derived from completed dose-volume curves

mod homogeneity;

pub use homogeneity::{apply_homogeneity_index, homogeneity_index, is_target_structure};
