//! Zero Core - CLI
//!
//! Command-line interface to evaluate value documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use zero_core::config::ZeroConfig;
use zero_core::document::{sample_document, DocumentLoader};
use zero_core::ZeroResult;

#[derive(Parser, Debug)]
#[command(version, about = "Report whether a value document is zero", long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the root of a JSON value document
    Check {
        #[arg(required = true)]
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Maximum number of heap slots accepted from the document
        #[arg(long)]
        max_heap_slots: Option<usize>,
    },
    /// Write a sample document containing a self-referential record
    Sample {
        #[arg(required = true)]
        path: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Plain,
    Json,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Commands::Check { path, format, max_heap_slots } => {
            let mut config = ZeroConfig::default();
            if let Some(limit) = max_heap_slots {
                config.max_heap_slots = limit;
            }
            check(&path, format, &config)
        }
        Commands::Sample { path } => write_sample(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging unavailable: {}", e);
    }
}

fn check(path: &Path, format: Format, config: &ZeroConfig) -> ZeroResult<()> {
    debug!(?config, "loading document");
    let loaded = DocumentLoader::load_path(path, config)?;
    let zero = loaded.is_zero();

    match format {
        Format::Plain => println!("{}", zero),
        Format::Json => {
            let report = json!({
                "path": path.display().to_string(),
                "zero": zero,
                "heap_slots": loaded.heap.len(),
                "root_kind": loaded.root.kind().to_string(),
                "config": config,
            });
            println!("{}", report);
        }
    }
    Ok(())
}

fn write_sample(path: &Path) -> ZeroResult<()> {
    let json = serde_json::to_string_pretty(&sample_document())?;
    fs::write(path, json)?;
    println!("wrote sample document to {}", path.display());
    Ok(())
}
