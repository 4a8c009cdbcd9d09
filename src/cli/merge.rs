// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.msa1.is_none() {
            self.msa1 = config.msa1;
        }
        if self.msa2.is_none() {
            self.msa2 = config.msa2;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.seq_type == "A" {
            if let Some(seq_type) = config.seq_type {
                self.seq_type = seq_type;
            }
        }
        if self.format == "csv" {
            if let Some(format) = config.format {
                self.format = format;
            }
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Reporting
        if self.top == 10 {
            if let Some(top) = config.top {
                self.top = top;
            }
        }

        // Flags (a switch given on the command line always wins)
        if !self.stats_only {
            self.stats_only = config.stats_only.unwrap_or(false);
        }
        if !self.dry_run {
            self.dry_run = config.dry_run.unwrap_or(false);
        }

        self
    }

    /// Load a configuration file and merge it
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
