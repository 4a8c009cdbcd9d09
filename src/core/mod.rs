// mod.rs - Core logic module

pub mod alphabet;
pub mod mutual_information;
pub mod pair_stats;
pub mod probability;

// Re-export main types for convenience
pub use alphabet::{Alphabet, SequenceType};
pub use mutual_information::mutual_information;
pub use pair_stats::{calculate_mit_table, check_sample_counts, compute_pair_score};
pub use pair_stats::{MitTable, PairCounts, PairResult};
pub use probability::counts_to_probabilities;
