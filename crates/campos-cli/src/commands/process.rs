//! Process command - extract fields from a single document.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use campos_core::{extract_document, DocxReader, Exporter, FieldSet};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input DOCX file
    #[arg(required = true)]
    input: PathBuf,

    /// Write the fields to this spreadsheet (.xlsx or .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the spreadsheet to the configured default file name
    #[arg(long, conflicts_with = "output")]
    save: bool,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary
    Text,
    /// JSON output
    Json,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    info!("Processing file: {}", args.input.display());

    let fields = extract_document(&DocxReader::new(), &args.input)?;

    match args.format {
        OutputFormat::Text => print!("{}", format_text(&fields)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fields)?),
    }

    if !fields.is_populated() {
        eprintln!(
            "{} No fields found in {}",
            style("ℹ").blue(),
            args.input.display()
        );
    }

    let destination = match (args.output, args.save) {
        (Some(path), _) => Some(path),
        (None, true) => Some(PathBuf::from(&config.export.single_file_name)),
        (None, false) => None,
    };

    match destination {
        Some(path) if !fields.is_populated() => {
            eprintln!(
                "{} Nothing to save, {} not written",
                style("⚠").yellow(),
                path.display()
            );
        }
        Some(path) => {
            Exporter::new()
                .with_bold_header(config.export.bold_header)
                .export_single(&fields, &path)?;
            eprintln!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => {}
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_text(fields: &FieldSet) -> String {
    let mut output = String::new();

    output.push_str(&format!("Nome: {}\n", fields.name));
    output.push_str(&format!("CPF:  {}\n", fields.id_number));
    output.push_str(&format!("Data: {}\n", fields.date));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text() {
        let text = format_text(&FieldSet::new("Ana", "", "01/01/2024"));
        assert_eq!(text, "Nome: Ana\nCPF:  \nData: 01/01/2024\n");
    }
}
