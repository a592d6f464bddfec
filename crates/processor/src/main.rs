//! `polyglot-processor` -- the data processor the API server launches.
//!
//! Transforms `--input`, saves the result under the XDG data directory and
//! prints a summary on stdout. Can be run in place of `python -m
//! processor.main` by pointing `PROCESSOR_PROGRAM` at this binary and
//! clearing `PROCESSOR_ARGS`.
//!
//! # Usage
//!
//! ```text
//! polyglot-processor --input "Hello World"
//! polyglot-processor --show-result
//! polyglot-processor --show-env
//! ```

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use polyglot_core::error::CoreError;
use polyglot_core::processing::{process_data, ProcessingRecord};
use polyglot_core::results::ResultStore;
use polyglot_core::xdg::BaseDirs;

/// Variables printed by `--show-env`, after the data directory.
const ENV_VARS: [&str; 6] = [
    "XDG_CONFIG_HOME",
    "XDG_CACHE_HOME",
    "XDG_DATA_HOME",
    "XDG_STATE_HOME",
    "HOME",
    "USER",
];

#[derive(Parser)]
#[command(
    name = "polyglot-processor",
    version,
    about = "Data processor for the polyglot example."
)]
struct Cli {
    /// Input data to process
    #[arg(short, long, default_value = "Sample data for processing")]
    input: String,

    /// Display the latest processing result
    #[arg(short = 's', long)]
    show_result: bool,

    /// Show environment information
    #[arg(long)]
    show_env: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dirs = BaseDirs::from_env();

    if cli.show_env {
        print!("{}", environment_report(&base_dirs, |k| std::env::var(k).ok()));
        return Ok(());
    }

    let store = ResultStore::from_base_dirs(&base_dirs).context("locating data directory")?;

    if cli.show_result {
        match store.read().await {
            Ok(stored) => {
                println!("Latest Result:");
                println!("{}", stored.content);
            }
            Err(CoreError::NotFound { .. }) => println!("No results found"),
            Err(e) => println!("{e}"),
        }
        return Ok(());
    }

    println!("Processing data...");
    println!("Input: {}\n", cli.input);

    let record = process_data(&cli.input, Utc::now());
    let path = store.save(&record).await.context("saving result")?;

    print!("{}", summary(&record, &path));
    Ok(())
}

/// Completion line plus the summary block printed after processing.
fn summary(record: &ProcessingRecord, path: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Processing complete!");
    let _ = writeln!(out, "Results saved to: {}", path.display());
    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(out, "  Status: {}", record.status);
    let _ = writeln!(out, "  Timestamp: {}", record.timestamp.to_rfc3339());
    let _ = writeln!(out, "  Original length: {}", record.data.length);
    let _ = writeln!(out, "  Word count: {}", record.data.word_count);
    out
}

fn environment_report<F>(base_dirs: &BaseDirs, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::new();
    let rule = "=".repeat(50);
    let _ = writeln!(out, "\nProcessor Environment\n{rule}");

    let _ = writeln!(out, "\nData Directory:");
    match ResultStore::from_base_dirs(base_dirs) {
        Ok(store) => {
            let _ = writeln!(out, "  {}", store.dir().display());
        }
        Err(e) => {
            let _ = writeln!(out, "  {e}");
        }
    }

    let _ = writeln!(out, "\nEnvironment Variables:");
    for var in ENV_VARS {
        let value = lookup(var).unwrap_or_else(|| "Not set".to_string());
        let _ = writeln!(out, "  {var}: {value}");
    }

    let _ = writeln!(out, "\nProcessor:");
    let _ = writeln!(out, "  Version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(out, "\n{rule}");
    out
}
