//! Batch processing command for multiple documents.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::{glob_with, MatchOptions, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use campos_core::models::config::BatchConfig;
use campos_core::{DocxReader, Exporter, ExtractionTable, Session};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files, folders or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output spreadsheet (.xlsx or .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only search the top level of input folders
    #[arg(long)]
    no_recursive: bool,

    /// Drop files with this name from the batch (repeatable)
    #[arg(long = "remove", value_name = "FILE_NAME")]
    remove: Vec<String>,

    /// Print the result rows as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let mut batch_config = config.batch.clone();
    if args.no_recursive {
        batch_config.recursive = false;
    }

    let mut session = Session::new();
    for input in &args.inputs {
        let found = discover(input, &batch_config)?;
        let added = session.add_paths(found);
        debug!("{}: {} file(s) added", input, added);
    }

    if !args.remove.is_empty() {
        session.remove_by_file_name(args.remove.iter().cloned());
    }

    if session.files().is_empty() {
        anyhow::bail!(
            "No .{} files found for: {}",
            batch_config.extension,
            args.inputs.join(", ")
        );
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        session.files().len()
    );

    let pb = ProgressBar::new(session.files().len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    session.process_with_progress(&DocxReader::new(), |_| pb.inc(1));
    pb.finish_and_clear();

    let table = session.results();
    if args.json {
        println!("{}", serde_json::to_string_pretty(table)?);
    } else {
        print!("{}", format_rows(table));
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.export.batch_file_name));
    Exporter::new()
        .with_bold_header(config.export.bold_header)
        .export_table(table, &output)?;

    let summary = session.summary();
    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        summary.total,
        start.elapsed()
    );
    eprintln!(
        "   {} with data extracted, {} with errors",
        style(summary.extracted).green(),
        style(summary.failed).red()
    );
    eprintln!(
        "{} Spreadsheet written to {}",
        style("✓").green(),
        output.display()
    );

    Ok(())
}

/// Expand one command-line input into document paths.
///
/// Folders are searched for the configured extension, glob patterns are
/// expanded, anything else is taken as a file path as given so that a
/// missing file still gets its own error row.
fn discover(input: &str, config: &BatchConfig) -> anyhow::Result<Vec<PathBuf>> {
    let path = Path::new(input);

    if path.is_dir() {
        let dir = Pattern::escape(&path.to_string_lossy());
        let pattern = if config.recursive {
            format!("{}/**/*.{}", dir, config.extension)
        } else {
            format!("{}/*.{}", dir, config.extension)
        };

        let found = expand_glob(&pattern)?;
        if found.is_empty() {
            warn!("No .{} files found in {}", config.extension, path.display());
        }
        return Ok(found);
    }

    if input.contains(['*', '?', '[']) {
        let found = expand_glob(input)?
            .into_iter()
            .filter(|p| has_extension(p, &config.extension))
            .collect();
        return Ok(found);
    }

    Ok(vec![path.to_path_buf()])
}

fn expand_glob(pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let found = glob_with(pattern, options)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    Ok(found)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn format_rows(table: &ExtractionTable) -> String {
    let mut output = String::new();

    output.push_str("Arquivo | Nome | CPF | Data\n");
    for row in table {
        let fields = row.fields();
        output.push_str(&format!(
            "{} | {} | {} | {}\n",
            row.file_name, fields.name, fields.id_number, fields.date
        ));
    }

    let failed: Vec<_> = table.iter().filter(|r| r.has_error()).collect();
    if !failed.is_empty() {
        output.push('\n');
        output.push_str("Failed files:\n");
        for row in failed {
            output.push_str(&format!(
                "  - {}: {}\n",
                row.file_name,
                row.error().unwrap_or("unknown error")
            ));
        }
    }

    output
}
