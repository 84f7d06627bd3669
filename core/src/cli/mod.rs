pub mod format;
pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::types::{StructureCategory, StructureFilter};

/// Command-line arguments for dvhstat
#[derive(Parser, Debug)]
#[command(name = "dvhstat")]
#[command(about = "Dose-volume histogram report parser and plan metrics tool")]
#[command(version)]
pub struct Cli {
    /// Path to the DVH text export
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Only show structures whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show structures of this category
    #[arg(short, long)]
    pub category: Option<CategoryArg>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the structure filter selected on the command line
    pub fn structure_filter(&self) -> StructureFilter {
        StructureFilter {
            search: self.search.clone(),
            category: self.category.clone().map(Into::into),
        }
    }
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Structure category options
#[derive(Debug, Clone, ValueEnum)]
pub enum CategoryArg {
    /// Planning, clinical and gross target volumes
    Targets,
    /// Organs at risk
    Oars,
    /// Everything else
    Other,
}

impl From<CategoryArg> for StructureCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Targets => StructureCategory::Target,
            CategoryArg::Oars => StructureCategory::OrganAtRisk,
            CategoryArg::Other => StructureCategory::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "dvhstat",
            "plan.txt",
            "--format",
            "json",
            "--search",
            "lung",
            "--category",
            "oars",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.file, PathBuf::from("plan.txt"));
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(cli.verbose);
        assert_eq!(
            cli.structure_filter(),
            StructureFilter::default()
                .with_search("lung")
                .with_category(StructureCategory::OrganAtRisk)
        );
    }

    #[test]
    fn test_default_args() {
        let cli = Cli::try_parse_from(["dvhstat", "plan.txt"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Text));
        assert!(cli.structure_filter().is_permissive());
    }

    #[test]
    fn test_missing_file_arg() {
        assert!(Cli::try_parse_from(["dvhstat"]).is_err());
    }
}
