// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub msa1: Option<String>,
    pub msa2: Option<String>,
    pub output: Option<String>,

    // Core settings
    pub seq_type: Option<String>,
    pub format: Option<String>,

    // Performance
    pub threads: Option<usize>,

    // Reporting
    pub top: Option<usize>,

    // Flags
    pub stats_only: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# mitscore.toml - Configuration file for mitscore
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Multiple sequence alignment in FASTA format
msa1 = "/path/to/msa1.fasta"

# Second alignment, sample-aligned with msa1 (omit to score msa1 against itself)
# msa2 = "/path/to/msa2.fasta"

# Output directory (results go to <output>/mit_results.<format>)
output = "mit_output"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# Sequence type: A (amino acid, 20 symbols) or N (nucleic acid, 4 symbols)
seq_type = "A"

# Output format: csv, tsv, json
format = "csv"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8

# =============================================================================
# REPORTING
# =============================================================================

# Number of top scoring position pairs printed after the run
top = 10

# =============================================================================
# FLAGS
# =============================================================================

# Show alignment statistics only
stats_only = false

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}
