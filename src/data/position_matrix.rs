// position_matrix.rs - Per-position view of an aligned sequence set

use crate::core::alphabet::Alphabet;
use crate::core::probability::counts_to_probabilities;

/// Alignment transposed into columns.
///
/// Column `p` (1-based) holds the symbol of every sample at offset `p - 1`,
/// in sample order. The matrix is built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMatrix {
    columns: Vec<Vec<u8>>,
}

/// Summary statistics of one alignment against an alphabet
#[derive(Debug, Clone)]
pub struct AlignmentSummary {
    pub samples: usize,
    pub width: usize,
    pub missing_fraction: f64,
    pub invariant_positions: usize,
    pub all_missing_positions: usize,
    pub mean_entropy: f64,
    pub max_entropy: f64,
}

impl PositionMatrix {
    /// Transpose aligned sequences into position columns.
    ///
    /// All sequences are expected to share one length. If they do not, column
    /// `p` only receives entries from sequences at least `p` long, which the
    /// pair statistics engine later reports as a sample count mismatch.
    pub fn from_sequences<S: AsRef<[u8]>>(sequences: &[S]) -> Self {
        let width = sequences
            .iter()
            .map(|s| s.as_ref().len())
            .max()
            .unwrap_or(0);

        let mut columns: Vec<Vec<u8>> = (0..width)
            .map(|_| Vec::with_capacity(sequences.len()))
            .collect();
        for sequence in sequences {
            for (column, &symbol) in columns.iter_mut().zip(sequence.as_ref()) {
                column.push(symbol);
            }
        }

        Self { columns }
    }

    /// Build a matrix directly from columns (column 0 is position 1)
    pub fn from_columns(columns: Vec<Vec<u8>>) -> Self {
        Self { columns }
    }

    /// Number of positions (alignment width)
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Symbols observed at a 1-based position
    pub fn column(&self, position: usize) -> Option<&[u8]> {
        position
            .checked_sub(1)
            .and_then(|i| self.columns.get(i))
            .map(Vec::as_slice)
    }

    /// Iterate over `(position, column)` in ascending position order
    pub fn positions(&self) -> impl Iterator<Item = (usize, &[u8])> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| (i + 1, column.as_slice()))
    }

    /// Column slices indexed from 0
    pub(crate) fn columns(&self) -> &[Vec<u8>] {
        &self.columns
    }

    /// Number of samples, i.e. the length of the longest column
    pub fn sample_count(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Missing data, variability and per-column entropy (log base |alphabet|)
    pub fn summary(&self, alphabet: &Alphabet) -> AlignmentSummary {
        let mut total = 0usize;
        let mut missing = 0usize;
        let mut invariant_positions = 0;
        let mut all_missing_positions = 0;
        let mut entropy_sum = 0.0;
        let mut max_entropy: f64 = 0.0;

        let ln_base = alphabet.ln_base();
        let mut counts = vec![0u32; alphabet.len()];
        for column in &self.columns {
            counts.iter_mut().for_each(|c| *c = 0);
            for &symbol in column {
                match alphabet.index_of(symbol) {
                    Some(i) => counts[i] += 1,
                    None => missing += 1,
                }
            }
            total += column.len();

            let distinct = counts.iter().filter(|&&c| c > 0).count();
            if distinct == 0 {
                all_missing_positions += 1;
            }
            if distinct <= 1 {
                invariant_positions += 1;
            }

            let entropy: f64 = counts_to_probabilities(&counts)
                .into_iter()
                .filter(|&p| p > 0.0)
                .map(|p| -p * p.ln() / ln_base)
                .sum();
            entropy_sum += entropy;
            max_entropy = max_entropy.max(entropy);
        }

        let width = self.columns.len();
        AlignmentSummary {
            samples: self.sample_count(),
            width,
            missing_fraction: if total == 0 {
                0.0
            } else {
                missing as f64 / total as f64
            },
            invariant_positions,
            all_missing_positions,
            mean_entropy: if width == 0 {
                0.0
            } else {
                entropy_sum / width as f64
            },
            max_entropy,
        }
    }
}
