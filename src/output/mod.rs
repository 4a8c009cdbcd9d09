// mod.rs - Result table writers

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;

use crate::core::MitTable;
use crate::error::{MitError, Result};

/// Base name of the result file inside the output directory
pub const RESULTS_STEM: &str = "mit_results";

/// Result table format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: {}. Use: csv, tsv, json", s)),
        }
    }
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

/// Path of the result file for an output directory
pub fn results_path(output_dir: &Path, format: OutputFormat) -> PathBuf {
    output_dir.join(format!("{}.{}", RESULTS_STEM, format.extension()))
}

/// Write the table as `Position_MSA1`, `Position_MSA2`, `MIT_Score` rows
pub fn write_table_to<W: Write>(writer: W, format: OutputFormat, table: &MitTable) -> Result<()> {
    match format {
        OutputFormat::Csv => write_delimited(writer, b',', table),
        OutputFormat::Tsv => write_delimited(writer, b'\t', table),
        OutputFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, table.records())
                .map_err(|e| MitError::Output(e.to_string()))?;
            writeln!(writer).map_err(|e| MitError::Output(e.to_string()))
        }
    }
}

fn write_delimited<W: Write>(writer: W, delimiter: u8, table: &MitTable) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    for record in table.records() {
        writer
            .serialize(record)
            .map_err(|e| MitError::Output(e.to_string()))?;
    }
    writer.flush().map_err(|e| MitError::Output(e.to_string()))
}

/// Write the table into `output_dir`, creating the directory if needed.
/// Returns the path of the written file.
pub fn write_results(output_dir: &Path, format: OutputFormat, table: &MitTable) -> Result<PathBuf> {
    create_dir_all(output_dir).map_err(|e| {
        MitError::Output(format!(
            "Failed to create output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })?;

    let path = results_path(output_dir, format);
    let file = File::create(&path).map_err(|e| {
        MitError::Output(format!(
            "Failed to create output file '{}': {}",
            path.display(),
            e
        ))
    })?;
    write_table_to(BufWriter::new(file), format, table)?;

    info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(path)
}
