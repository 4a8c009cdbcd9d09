// error.rs - Error types for MIT score computation

use std::error;
use std::fmt;

/// Errors raised while loading alignments or scoring position pairs.
///
/// `SampleCountMismatch` is the one error the statistics engine itself can
/// produce: the two compared columns hold a different number of samples, so
/// the two alignments cannot be sample-aligned and no score is meaningful.
/// The remaining variants come from the input and output layers.
#[derive(Debug, Clone, PartialEq)]
pub enum MitError {
    /// The columns compared at `position1` (MSA 1) and `position2` (MSA 2)
    /// hold a different number of samples.
    SampleCountMismatch {
        position1: usize,
        position2: usize,
        samples1: usize,
        samples2: usize,
    },

    /// A position matrix without any position was handed to the engine.
    EmptyMatrix,

    /// A FASTA input did not contain any sequence.
    EmptyInput { source: String },

    /// Sequence `record` (1-based) of `source` has a different length than
    /// the first sequence of the alignment.
    RaggedAlignment {
        source: String,
        record: usize,
        expected: usize,
        found: usize,
    },

    /// A FASTA record could not be parsed.
    Fasta { source: String, message: String },

    /// A file could not be opened or read.
    Io { path: String, message: String },

    /// Writing the result table failed.
    Output(String),
}

impl fmt::Display for MitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleCountMismatch {
                position1,
                position2,
                samples1,
                samples2,
            } => write!(
                f,
                "The number of sequences at position {position1} in MSA1 ({samples1}) does not match \
                 the number of sequences at position {position2} in MSA2 ({samples2})"
            ),
            Self::EmptyMatrix => write!(f, "Position matrix has no positions"),
            Self::EmptyInput { source } => write!(f, "No sequences found in {source}"),
            Self::RaggedAlignment {
                source,
                record,
                expected,
                found,
            } => write!(
                f,
                "Sequence {record} in {source} has length {found}, expected {expected} (input is not aligned)"
            ),
            Self::Fasta { source, message } => {
                write!(f, "Invalid FASTA record in {source}: {message}")
            }
            Self::Io { path, message } => write!(f, "Failed to read '{path}': {message}"),
            Self::Output(message) => write!(f, "Failed to write results: {message}"),
        }
    }
}

impl error::Error for MitError {}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MitError>;

impl From<MitError> for String {
    fn from(err: MitError) -> Self {
        err.to_string()
    }
}
