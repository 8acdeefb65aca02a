//! impress-isn CLI
//!
//! Validate, classify, and convert ISBN, ISSN, and ISMN identifiers from
//! the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use impress_isn::{
    analyze, canonical_form_with, classify, generate_check, is_valid_identifier,
    isbn10_to_13_with_prefix, issn_from_ean13, recover_leading_zeroes, IdentifierType, IsnConfig,
    IsnError, CONFIG_ENV_VAR,
};

/// Work with International Standard Numbers (ISBN, ISSN, ISMN).
#[derive(Debug, Parser)]
#[command(name = "impress-isn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// TOML config file.
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check shape and check digit of each identifier.
    Validate {
        #[arg(required = true)]
        isns: Vec<String>,
    },

    /// Report the identifier type of a valid identifier.
    Classify { isn: String },

    /// Compute the check digit for a body (7-10 or 12-13 characters).
    Check { body: String },

    /// Convert an ISBN-10 to ISBN-13.
    Convert {
        isbn10: String,

        /// Three digit prefix; defaults to the configured prefix.
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Extract the ISSN from a 977 EAN13.
    Issn { ean: String },

    /// Test whether an identifier validates once leading zeroes are restored.
    Recover {
        isn: String,

        /// Identifier type: issn or isbn10.
        #[arg(long)]
        kind: IdentifierType,
    },

    /// Canonical form, validity, type, and check digit of each identifier.
    Analyze {
        #[arg(required = true)]
        isns: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
struct Validation<'a> {
    input: &'a str,
    canonical: String,
    valid: bool,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Drop whitespace inside the identifier when configured; hyphens stay so
/// the shape check still sees them.
fn prepare(isn: &str, config: &IsnConfig) -> String {
    if config.strip_internal_whitespace {
        isn.split_whitespace().collect()
    } else {
        isn.to_string()
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<IsnConfig, IsnError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            IsnConfig::load(path)
        }
        None => Ok(IsnConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Validate { isns } => {
            let results: Vec<Validation> = isns
                .iter()
                .map(|isn| Validation {
                    input: isn,
                    canonical: canonical_form_with(isn, &config),
                    valid: is_valid_identifier(&prepare(isn, &config)),
                })
                .collect();

            if cli.json {
                print_json(&results)?;
            } else {
                for result in &results {
                    let verdict = if result.valid { "valid" } else { "invalid" };
                    println!("{}\t{}", result.input, verdict);
                }
            }

            if results.iter().all(|r| r.valid) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Classify { isn } => {
            let kind = classify(&prepare(&isn, &config))?;
            if cli.json {
                print_json(&serde_json::json!({ "input": isn, "identifier_type": kind }))?;
            } else {
                println!("{}", kind);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { body } => {
            let canon = canonical_form_with(&body, &config);
            let check = generate_check(&canon)?;
            if cli.json {
                print_json(&serde_json::json!({ "body": canon, "check_digit": check }))?;
            } else {
                println!("{}", check);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Convert { isbn10, prefix } => {
            let prefix = prefix.unwrap_or_else(|| config.isbn13_prefix.clone());
            let canon = canonical_form_with(&isbn10, &config);
            if !is_valid_identifier(&prepare(&isbn10, &config)) {
                warn!(isbn10 = %isbn10, "converting an identifier that does not validate");
            }
            let isbn13 = isbn10_to_13_with_prefix(&prefix, &canon)?;
            if cli.json {
                print_json(&serde_json::json!({ "isbn10": isbn10, "isbn13": isbn13 }))?;
            } else {
                println!("{}", isbn13);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Issn { ean } => {
            let issn = issn_from_ean13(&prepare(&ean, &config));
            if cli.json {
                print_json(&serde_json::json!({ "ean": ean, "issn": issn }))?;
            } else {
                println!("{}", issn);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Recover { isn, kind } => {
            let recovered = recover_leading_zeroes(&prepare(&isn, &config), kind);
            if cli.json {
                print_json(&serde_json::json!({
                    "input": isn,
                    "identifier_type": kind,
                    "recovered": recovered,
                }))?;
            } else {
                println!("{}", recovered);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Analyze { isns } => {
            let reports: Vec<_> = isns
                .iter()
                .map(|isn| {
                    let mut report = analyze(&prepare(isn, &config));
                    report.input = isn.clone();
                    report
                })
                .collect();
            if cli.json {
                print_json(&reports)?;
            } else {
                for report in &reports {
                    let kind = report
                        .identifier_type
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let check = report
                        .check_digit
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{}\t{}\t{}\t{}\t{}",
                        report.input,
                        report.canonical,
                        if report.valid { "valid" } else { "invalid" },
                        kind,
                        check
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
