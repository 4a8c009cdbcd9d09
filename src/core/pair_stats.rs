// pair_stats.rs - Pair statistics engine

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::core::alphabet::Alphabet;
use crate::core::mutual_information::mutual_information;
use crate::core::probability::counts_to_probabilities;
use crate::data::PositionMatrix;
use crate::error::{MitError, Result};

/// MIT score of one position pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairResult {
    #[serde(rename = "Position_MSA1")]
    pub position1: usize,
    #[serde(rename = "Position_MSA2")]
    pub position2: usize,
    #[serde(rename = "MIT_Score")]
    pub score: f64,
}

/// Scores of every (MSA 1 position, MSA 2 position) pair,
/// ordered by `(position1, position2)` ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct MitTable {
    records: Vec<PairResult>,
    width1: usize,
    width2: usize,
}

impl MitTable {
    pub fn records(&self) -> &[PairResult] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dimensions as (positions in MSA 1, positions in MSA 2)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width1, self.width2)
    }

    /// Score of a 1-based position pair
    pub fn score(&self, position1: usize, position2: usize) -> Option<f64> {
        if position1 == 0 || position2 == 0 || position1 > self.width1 || position2 > self.width2 {
            return None;
        }
        self.records
            .get((position1 - 1) * self.width2 + (position2 - 1))
            .map(|r| r.score)
    }

    /// The `n` highest scoring pairs, ties broken by position order.
    /// Self pairs (`position1 == position2`) are skipped when `skip_self` is set.
    pub fn top_pairs(&self, n: usize, skip_self: bool) -> Vec<PairResult> {
        let mut ranked: Vec<PairResult> = self
            .records
            .iter()
            .filter(|r| !(skip_self && r.position1 == r.position2))
            .copied()
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.position1.cmp(&b.position1))
                .then(a.position2.cmp(&b.position2))
        });
        ranked.truncate(n);
        ranked
    }
}

impl IntoIterator for MitTable {
    type Item = PairResult;
    type IntoIter = std::vec::IntoIter<PairResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Joint and marginal symbol counts for one position pair.
///
/// Tables are flat arrays indexed through the alphabet, so every symbol
/// (pair) has an entry even when it was never observed.
#[derive(Debug, Clone)]
pub struct PairCounts {
    n_symbols: usize,
    joint: Vec<u32>,
    marginal1: Vec<u32>,
    marginal2: Vec<u32>,
    observations: u32,
}

impl PairCounts {
    pub fn new(alphabet: &Alphabet) -> Self {
        let n = alphabet.len();
        Self {
            n_symbols: n,
            joint: vec![0; n * n],
            marginal1: vec![0; n],
            marginal2: vec![0; n],
            observations: 0,
        }
    }

    fn reset(&mut self) {
        self.joint.iter_mut().for_each(|c| *c = 0);
        self.marginal1.iter_mut().for_each(|c| *c = 0);
        self.marginal2.iter_mut().for_each(|c| *c = 0);
        self.observations = 0;
    }

    /// Count symbol co-occurrences of two equally long columns.
    ///
    /// A sample with missing data at either position is skipped entirely.
    pub fn tally(&mut self, column1: &[u8], column2: &[u8], alphabet: &Alphabet) {
        debug_assert_eq!(column1.len(), column2.len());
        self.reset();
        for (&base1, &base2) in column1.iter().zip(column2) {
            let (Some(a), Some(b)) = (alphabet.index_of(base1), alphabet.index_of(base2)) else {
                continue;
            };
            self.joint[a * self.n_symbols + b] += 1;
            self.marginal1[a] += 1;
            self.marginal2[b] += 1;
            self.observations += 1;
        }
    }

    /// Samples that contributed to the counts
    pub fn observations(&self) -> u32 {
        self.observations
    }

    pub fn joint(&self, a: usize, b: usize) -> u32 {
        self.joint[a * self.n_symbols + b]
    }

    /// Normalize the three tables and compute the MIT score
    pub fn score(&self, alphabet: &Alphabet) -> f64 {
        mutual_information(
            &counts_to_probabilities(&self.joint),
            &counts_to_probabilities(&self.marginal1),
            &counts_to_probabilities(&self.marginal2),
            alphabet,
        )
    }
}

/// MIT score of a single pair of columns.
///
/// `position1`/`position2` only label the error when the columns hold a
/// different number of samples.
pub fn compute_pair_score(
    column1: &[u8],
    column2: &[u8],
    position1: usize,
    position2: usize,
    alphabet: &Alphabet,
) -> Result<f64> {
    if column1.len() != column2.len() {
        return Err(MitError::SampleCountMismatch {
            position1,
            position2,
            samples1: column1.len(),
            samples2: column2.len(),
        });
    }
    let mut counts = PairCounts::new(alphabet);
    counts.tally(column1, column2, alphabet);
    Ok(counts.score(alphabet))
}

/// Verify that every compared column pair holds the same number of samples.
///
/// Pairs are checked in output order, so the reported pair is the first one
/// that would have been scored.
pub fn check_sample_counts(matrix1: &PositionMatrix, matrix2: &PositionMatrix) -> Result<()> {
    for (position1, column1) in matrix1.positions() {
        for (position2, column2) in matrix2.positions() {
            if column1.len() != column2.len() {
                return Err(MitError::SampleCountMismatch {
                    position1,
                    position2,
                    samples1: column1.len(),
                    samples2: column2.len(),
                });
            }
        }
    }
    Ok(())
}

/// Compute the MIT score of every position pair between two matrices.
///
/// Pass the same matrix twice for self-comparison. Sample counts are
/// validated for the whole cross product before any score is computed, so a
/// mismatch yields no partial table. Pairs are scored in parallel and
/// slotted by index, keeping `(position1, position2)` order.
pub fn calculate_mit_table(
    matrix1: &PositionMatrix,
    matrix2: &PositionMatrix,
    alphabet: &Alphabet,
    show_progress: bool,
) -> Result<MitTable> {
    if matrix1.is_empty() || matrix2.is_empty() {
        return Err(MitError::EmptyMatrix);
    }
    check_sample_counts(matrix1, matrix2)?;

    let width1 = matrix1.width();
    let width2 = matrix2.width();
    let total_pairs = width1 * width2;
    info!(
        "Scoring {} x {} = {} position pairs over {} symbols",
        width1,
        width2,
        total_pairs,
        alphabet.len()
    );

    let pb = if show_progress {
        let pb = ProgressBar::new(total_pairs as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let update_interval = std::cmp::max(1, total_pairs / 100);
    let completed = AtomicUsize::new(0);
    let columns1 = matrix1.columns();
    let columns2 = matrix2.columns();

    let records: Vec<PairResult> = (0..total_pairs)
        .into_par_iter()
        .map_init(
            || PairCounts::new(alphabet),
            |counts, idx| {
                let (i, j) = (idx / width2, idx % width2);
                counts.tally(&columns1[i], &columns2[j], alphabet);
                let score = counts.score(alphabet);

                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if done % update_interval == 0 {
                    pb.set_position(done as u64);
                }

                PairResult {
                    position1: i + 1,
                    position2: j + 1,
                    score,
                }
            },
        )
        .collect();

    pb.finish_and_clear();
    debug!(
        "Scored {} pairs in {:.3}s",
        records.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(MitTable {
        records,
        width1,
        width2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amino() -> Alphabet {
        Alphabet::amino_acids()
    }

    fn column(runs: &[(u8, usize)]) -> Vec<u8> {
        runs.iter()
            .flat_map(|&(symbol, n)| std::iter::repeat(symbol).take(n))
            .collect()
    }

    #[test]
    fn test_constant_column_self_comparison_is_zero() {
        let matrix = PositionMatrix::from_sequences(&["AR", "AN", "AD", "AC"]);
        let table = calculate_mit_table(&matrix, &matrix, &amino(), false).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.score(1, 1), Some(0.0));
        assert_eq!(table.score(1, 2), Some(0.0));
    }

    #[test]
    fn test_perfect_covariation_log20_of_two() {
        let matrix1 = PositionMatrix::from_columns(vec![column(&[(b'L', 50), (b'A', 50)])]);
        let matrix2 = PositionMatrix::from_columns(vec![column(&[(b'N', 50), (b'A', 50)])]);

        let table = calculate_mit_table(&matrix1, &matrix2, &amino(), false).unwrap();
        let score = table.score(1, 1).unwrap();
        assert!((score - 0.23137821315975918).abs() < 1e-12);
    }

    #[test]
    fn test_self_information_is_column_entropy() {
        // two symbols, half the samples each: H = log_|A|(2)
        let col = column(&[(b'A', 6), (b'T', 6)]);
        let nucleotides = Alphabet::nucleic_acids();
        let score = compute_pair_score(&col, &col, 1, 1, &nucleotides).unwrap();
        assert!((score - 0.5).abs() < 1e-12);

        let score = compute_pair_score(&col, &col, 1, 1, &amino()).unwrap();
        assert!((score - 2f64.ln() / 20f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_independent_columns_score_zero() {
        // every combination of {A, C} x {G, T} appears equally often
        let col1 = b"AACCAACC".to_vec();
        let col2 = b"GTGTGTGT".to_vec();
        let score = compute_pair_score(&col1, &col2, 1, 2, &Alphabet::nucleic_acids()).unwrap();
        assert!(score.abs() < 1e-12);
    }

    #[test]
    fn test_missing_data_is_excluded() {
        let nucleotides = Alphabet::nucleic_acids();
        let mut counts = PairCounts::new(&nucleotides);
        counts.tally(b"AC-TN", b"AGGX-", &nucleotides);
        assert_eq!(counts.observations(), 2);
        assert_eq!(counts.joint(0, 0), 1);
        assert_eq!(counts.joint(1, 2), 1);

        // the scored samples are the same as with the gapped ones removed
        let with_gaps = compute_pair_score(b"AC-TNAC", b"AGGX-GA", 1, 1, &nucleotides).unwrap();
        let without = compute_pair_score(b"ACAC", b"AGGA", 1, 1, &nucleotides).unwrap();
        assert!((with_gaps - without).abs() < 1e-15);
    }

    #[test]
    fn test_all_missing_pair_scores_zero() {
        let matrix1 = PositionMatrix::from_sequences(&["-A", "-C", "XA"]);
        let matrix2 = PositionMatrix::from_sequences(&["AA", "CC", "GA"]);
        let table = calculate_mit_table(&matrix1, &matrix2, &amino(), false).unwrap();
        assert_eq!(table.score(1, 1), Some(0.0));
        assert_eq!(table.score(1, 2), Some(0.0));
    }

    #[test]
    fn test_lowercase_is_missing() {
        let score = compute_pair_score(b"aacc", b"aacc", 1, 1, &Alphabet::nucleic_acids()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_sample_count_mismatch_aborts() {
        let sequences1: Vec<String> = (0..10).map(|_| "ACDEF".to_string()).collect();
        let matrix1 = PositionMatrix::from_sequences(&sequences1);

        let mut columns: Vec<Vec<u8>> = (0..5).map(|_| vec![b'A'; 10]).collect();
        columns[2].pop();
        let matrix2 = PositionMatrix::from_columns(columns);

        let result = calculate_mit_table(&matrix1, &matrix2, &amino(), false);
        // first offending pair in output order is (1, 3)
        assert_eq!(
            result,
            Err(MitError::SampleCountMismatch {
                position1: 1,
                position2: 3,
                samples1: 10,
                samples2: 9,
            })
        );

        let col3_1 = matrix1.column(3).unwrap();
        let col3_2 = matrix2.column(3).unwrap();
        assert_eq!(
            compute_pair_score(col3_1, col3_2, 3, 3, &amino()),
            Err(MitError::SampleCountMismatch {
                position1: 3,
                position2: 3,
                samples1: 10,
                samples2: 9,
            })
        );
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let empty = PositionMatrix::from_columns(Vec::new());
        let matrix = PositionMatrix::from_sequences(&["AC"]);
        assert_eq!(
            calculate_mit_table(&empty, &matrix, &amino(), false),
            Err(MitError::EmptyMatrix)
        );
    }

    #[test]
    fn test_order_and_dimensions() {
        let matrix1 = PositionMatrix::from_sequences(&["ACG", "CGT", "GTA"]);
        let matrix2 = PositionMatrix::from_sequences(&["TG", "GA", "CC"]);
        let table = calculate_mit_table(&matrix1, &matrix2, &Alphabet::nucleic_acids(), false)
            .unwrap();

        assert_eq!(table.dimensions(), (3, 2));
        let order: Vec<(usize, usize)> = table
            .records()
            .iter()
            .map(|r| (r.position1, r.position2))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 1), (2, 2), (3, 1), (3, 2)]);
        assert_eq!(table.score(4, 1), None);
        assert_eq!(table.score(0, 1), None);
    }

    #[test]
    fn test_symmetry_under_swapped_matrices() {
        let matrix1 = PositionMatrix::from_sequences(&["ACGT", "AAGT", "CCTT", "GCGA", "ACTA", "T-GA"]);
        let matrix2 = PositionMatrix::from_sequences(&["TTA", "TCA", "GCA", "GGC", "AGC", "ATN"]);
        let alphabet = Alphabet::nucleic_acids();

        let forward = calculate_mit_table(&matrix1, &matrix2, &alphabet, false).unwrap();
        let reverse = calculate_mit_table(&matrix2, &matrix1, &alphabet, false).unwrap();
        for record in forward.records() {
            let swapped = reverse.score(record.position2, record.position1).unwrap();
            assert!((record.score - swapped).abs() < 1e-12);
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let sequences: Vec<String> = (0..40)
            .map(|i| {
                ["ARND", "CQEG", "HILK", "MFPS", "TWYV", "A-X*"][i % 6]
                    .chars()
                    .cycle()
                    .skip(i % 3)
                    .take(12)
                    .collect()
            })
            .collect();
        let matrix = PositionMatrix::from_sequences(&sequences);

        let first = calculate_mit_table(&matrix, &matrix, &amino(), false).unwrap();
        let second = calculate_mit_table(&matrix, &matrix, &amino(), false).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 144);
    }

    #[test]
    fn test_top_pairs() {
        let matrix = PositionMatrix::from_sequences(&["AAA", "CCA", "GGA", "TTA"]);
        let table = calculate_mit_table(&matrix, &matrix, &Alphabet::nucleic_acids(), false)
            .unwrap();

        let top = table.top_pairs(2, true);
        assert_eq!(top.len(), 2);
        assert_eq!((top[0].position1, top[0].position2), (1, 2));
        assert_eq!((top[1].position1, top[1].position2), (2, 1));
        assert!((top[0].score - 1.0).abs() < 1e-12);

        let with_self = table.top_pairs(1, false);
        assert_eq!((with_self[0].position1, with_self[0].position2), (1, 1));
    }
}
