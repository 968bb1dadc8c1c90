// src/main.rs
mod utils;
mod export;
mod extractors;
mod render;
mod storage;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use utils::AppError;
use extractors::parse_relations;
use storage::StorageManager;

/// Extracts relation records from population-register transcriptions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file to parse, or "-" for stdin (default: the last stored input)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for the stored input and exports
    #[arg(short, long, env = "SEED_RELATIONS_OUTPUT_DIR", default_value = "./output")]
    output_dir: PathBuf,

    /// Export the records as CSV (with a JSON metadata sidecar)
    #[arg(long)]
    csv: bool,

    /// File name of the CSV export
    #[arg(long, default_value = "relations.csv")]
    csv_name: String,

    /// Also write an HTML preview of the table
    #[arg(long)]
    html: bool,

    /// Debug mode - log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(args.debug);
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Read fresh input and remember it, or fall back to the stored input
    let text = match &args.input {
        Some(path) => {
            let text = read_input(path)?;
            storage.save_input(&text)?;
            text
        }
        None => storage.load_input()?.ok_or_else(|| {
            AppError::Config(format!(
                "No --input given and no stored input in {}",
                args.output_dir.display()
            ))
        })?,
    };

    if text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    // 5. Parse and preview
    let records = parse_relations(&text);
    println!("{}", render::render_table(&records));
    if let Some(line) = render::summary(&records) {
        println!("\n{}", line);
    }

    if args.html {
        storage.save_html("relations_preview.html", &render::render_html(&records))?;
    }

    // 6. Export
    if args.csv {
        if records.is_empty() {
            tracing::warn!("Nothing to export: no relations were parsed");
            return Ok(());
        }

        let csv = export::to_csv(&records);
        let csv_path = storage.save_csv(&args.csv_name, &csv)?;
        let meta_name = format!("{}_meta.json", args.csv_name.trim_end_matches(".csv"));
        storage.save_metadata(&meta_name, &records)?;
        tracing::info!("Exported {} relation(s) to {}", records.len(), csv_path.display());
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        tracing::info!("Read {} bytes from stdin", text.len());
        return Ok(text);
    }

    let text = std::fs::read_to_string(path)?;
    tracing::info!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
