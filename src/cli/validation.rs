// validation.rs - Input validation utilities

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::args::Args;
use crate::core::{Alphabet, SequenceType};
use crate::output::OutputFormat;

pub struct ValidationResult {
    pub msa1: PathBuf,
    pub msa2: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub sequence_type: SequenceType,
    pub alphabet: Alphabet,
    pub format: OutputFormat,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let msa1 = args.msa1.as_deref().ok_or("--msa1 is required")?;
    let msa1 = existing_file(msa1, "")?;

    let msa2 = match args.msa2.as_deref() {
        Some(path) => Some(existing_file(path, " was passed and")?),
        None => None,
    };

    // Output is only needed when a table is actually written
    let output_dir = match args.output.as_deref() {
        Some(dir) => Some(PathBuf::from(dir)),
        None if args.stats_only || args.dry_run => None,
        None => return Err("--output is required".to_string()),
    };
    if let Some(dir) = &output_dir {
        if dir.exists() && !dir.is_dir() {
            return Err(format!(
                "Output path '{}' exists and is not a directory",
                dir.display()
            ));
        }
    }

    let sequence_type = SequenceType::from_str(&args.seq_type)?;
    let format = OutputFormat::from_str(&args.format)?;

    if args.threads == Some(0) {
        return Err("Number of threads must be greater than 0".to_string());
    }

    Ok(ValidationResult {
        msa1,
        msa2,
        output_dir,
        sequence_type,
        alphabet: sequence_type.alphabet(),
        format,
    })
}

fn existing_file(path: &str, context: &str) -> Result<PathBuf, String> {
    let path_buf = Path::new(path).to_path_buf();
    if !path_buf.is_file() {
        return Err(format!("The file {}{} does not exist.", path, context));
    }
    Ok(path_buf)
}
