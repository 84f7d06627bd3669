use clap::Parser;
use dvhstat_core::cli::{Cli, OutputFormat};
use dvhstat_core::{DvhReader, ParseResult, TextReport};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if !cli.file.is_file() {
        eprintln!("Error: {} is not a file", cli.file.display());
        process::exit(1);
    }

    info!("Processing report: {}", cli.file.display());

    let result = match DvhReader::parse_file(&cli.file) {
        Ok(result) => result,
        Err(e) => {
            error!("Failed to read {}: {}", cli.file.display(), e);
            eprintln!("Error reading file: {}", e);
            process::exit(1);
        }
    };

    let filter = cli.structure_filter();
    if !filter.is_permissive() {
        info!("Applying structure filter: {:?}", filter);
    }
    let result = result.filtered(&filter);

    output_result(&result, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn output_result(result: &ParseResult, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            print!("{}", TextReport::new(result));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match result.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
