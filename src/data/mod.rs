// mod.rs - Data structures module

pub mod position_matrix;
pub mod sequences;

// Re-export main types for convenience
pub use position_matrix::{AlignmentSummary, PositionMatrix};
pub use sequences::{write_fasta, AlignedSequenceSet};
