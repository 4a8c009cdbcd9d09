// lib.rs - mitscore library root

//! # mitscore - Mutual information between positions of multiple sequence alignments
//!
//! This library computes a Mutual Information (MIT) score for every pair of
//! positions between two sample-aligned multiple sequence alignments, or
//! between all positions of a single alignment, to highlight co-varying
//! (potentially co-evolving) positions.
//!
//! ## Features
//!
//! - **Exact scoring**: joint and marginal symbol frequencies per position pair,
//!   MI in log base |alphabet| (20 for amino acids, 4 for nucleotides)
//! - **Missing data aware**: gaps and ambiguity codes are excluded per pair
//! - **Parallel**: position pairs are scored with rayon in deterministic order
//! - **Multiple formats**: CSV, TSV and JSON result tables
//! - **Test data**: a simulator for alignments with planted co-varying positions
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use mitscore::prelude::*;
//!
//! let msa = AlignedSequenceSet::from_fasta(std::path::Path::new("msa.fasta"))?;
//! let matrix = msa.position_matrix();
//! let alphabet = SequenceType::AminoAcid.alphabet();
//!
//! // Self-comparison: every position against every position
//! let table = calculate_mit_table(&matrix, &matrix, &alphabet, false)?;
//! write_results(std::path::Path::new("out"), OutputFormat::Csv, &table)?;
//! # Ok::<(), mitscore::MitError>(())
//! ```
//!
//! The score is not corrected for the symbol diversity of a position: highly
//! variable positions tend to score higher regardless of co-variation.

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;
pub mod simulate;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{calculate_mit_table, check_sample_counts, compute_pair_score};
    pub use crate::core::{Alphabet, MitTable, PairCounts, PairResult, SequenceType};
    pub use crate::data::{AlignedSequenceSet, AlignmentSummary, PositionMatrix};
    pub use crate::error::MitError;
    pub use crate::output::{write_results, OutputFormat};
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, ValidationResult};
pub use crate::core::{Alphabet, MitTable, PairResult, SequenceType};
pub use crate::data::{AlignedSequenceSet, PositionMatrix};
pub use crate::error::MitError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "mitscore v{} - Mutual information between alignment positions",
        VERSION
    )
}
