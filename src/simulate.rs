// simulate.rs - Synthetic alignments with planted co-varying positions

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::core::alphabet::AMINO_ACIDS;

/// Background residue of every simulated sequence
pub const BACKGROUND: u8 = b'A';

/// Two positions (1-based) that change together in a fraction of samples.
///
/// In `change_percent` % of samples both positions are mutated. Of those
/// changes, `same_percent` % use one fixed residue pair, the rest draw
/// fresh random residues for both positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantedPair {
    pub position1: usize,
    pub position2: usize,
    pub change_percent: u32,
    pub same_percent: u32,
}

/// Strong, weak, rare-but-strict and rare-and-noisy co-variation
pub const DEFAULT_PLANTED_PAIRS: [PlantedPair; 4] = [
    PlantedPair { position1: 2, position2: 5, change_percent: 50, same_percent: 100 },
    PlantedPair { position1: 7, position2: 10, change_percent: 50, same_percent: 10 },
    PlantedPair { position1: 12, position2: 14, change_percent: 10, same_percent: 100 },
    PlantedPair { position1: 16, position2: 19, change_percent: 10, same_percent: 30 },
];

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub num_sequences: usize,
    pub width: usize,
    pub seed: u64,
    pub pairs: Vec<PlantedPair>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_sequences: 1000,
            width: 20,
            seed: 1994,
            pairs: DEFAULT_PLANTED_PAIRS.to_vec(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.num_sequences == 0 {
            return Err("Number of sequences must be greater than 0".to_string());
        }
        for pair in &self.pairs {
            for position in [pair.position1, pair.position2] {
                if position == 0 || position > self.width {
                    return Err(format!(
                        "Planted position {} is outside the alignment width {}",
                        position, self.width
                    ));
                }
            }
            if pair.change_percent > 100 || pair.same_percent > 100 {
                return Err(format!(
                    "Percentages for pair ({}, {}) must be between 0 and 100",
                    pair.position1, pair.position2
                ));
            }
        }
        Ok(())
    }
}

/// One residue pair per sample, `None` where the sample keeps the background
type PairChanges = Vec<Option<(u8, u8)>>;

fn random_residue<R: Rng>(rng: &mut R) -> u8 {
    AMINO_ACIDS[rng.gen_range(0..AMINO_ACIDS.len())]
}

/// Draw the changes of one planted pair across all samples
fn draw_changes<R: Rng>(rng: &mut R, num_sequences: usize, pair: &PlantedPair) -> PairChanges {
    // the fixed pair never falls back to the background residue
    let mut fixed1 = random_residue(rng);
    let mut fixed2 = random_residue(rng);
    if fixed1 == BACKGROUND {
        fixed1 = b'L';
    }
    if fixed2 == BACKGROUND {
        fixed2 = b'N';
    }

    (0..num_sequences)
        .map(|_| {
            if rng.gen_range(1..=100) > pair.change_percent {
                return None;
            }
            if rng.gen_range(1..=100) <= pair.same_percent {
                Some((fixed1, fixed2))
            } else {
                Some((random_residue(rng), random_residue(rng)))
            }
        })
        .collect()
}

fn background(config: &SimulationConfig) -> Vec<Vec<u8>> {
    vec![vec![BACKGROUND; config.width]; config.num_sequences]
}

/// One alignment holding both positions of every planted pair
pub fn simulate_single(config: &SimulationConfig) -> Result<Vec<Vec<u8>>, String> {
    config.validate()?;
    let mut rng = Xoshiro256StarStar::seed_from_u64(config.seed);
    let mut msa = background(config);

    for pair in &config.pairs {
        let changes = draw_changes(&mut rng, config.num_sequences, pair);
        for (seq, change) in msa.iter_mut().zip(changes) {
            if let Some((residue1, residue2)) = change {
                seq[pair.position1 - 1] = residue1;
                seq[pair.position2 - 1] = residue2;
            }
        }
    }
    Ok(msa)
}

/// Two sample-aligned alignments: the first position of each planted pair
/// is mutated in MSA 1, the second in MSA 2
pub fn simulate_paired(config: &SimulationConfig) -> Result<(Vec<Vec<u8>>, Vec<Vec<u8>>), String> {
    config.validate()?;
    let mut rng = Xoshiro256StarStar::seed_from_u64(config.seed);
    let mut msa1 = background(config);
    let mut msa2 = background(config);

    for pair in &config.pairs {
        let changes = draw_changes(&mut rng, config.num_sequences, pair);
        for ((seq1, seq2), change) in msa1.iter_mut().zip(msa2.iter_mut()).zip(changes) {
            if let Some((residue1, residue2)) = change {
                seq1[pair.position1 - 1] = residue1;
                seq2[pair.position2 - 1] = residue2;
            }
        }
    }
    Ok((msa1, msa2))
}
