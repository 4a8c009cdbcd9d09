// mutual_information.rs - MIT score of one position pair

use crate::core::alphabet::Alphabet;

/// Mutual information between two positions, in log base `|alphabet|`.
///
/// `joint` is row-major over the alphabet (`joint[a * n + b]` is the
/// probability of symbol `a` at the first position together with symbol `b`
/// at the second), `marginal1`/`marginal2` hold one probability per symbol.
///
/// ```text
/// MI = Σ_a Σ_b p(a,b) · log_n( p(a,b) / (p(a)·p(b)) )
/// ```
///
/// Terms where `p(a,b)`, `p(a)` or `p(b)` is zero contribute nothing.
/// The score is not corrected for the symbol diversity of either position,
/// so highly variable positions score higher regardless of co-variation.
pub fn mutual_information(
    joint: &[f64],
    marginal1: &[f64],
    marginal2: &[f64],
    alphabet: &Alphabet,
) -> f64 {
    let n = alphabet.len();
    debug_assert_eq!(joint.len(), n * n);
    debug_assert_eq!(marginal1.len(), n);
    debug_assert_eq!(marginal2.len(), n);

    let ln_base = alphabet.ln_base();
    let mut score = 0.0;
    for (a, &p_a) in marginal1.iter().enumerate() {
        for (b, &p_b) in marginal2.iter().enumerate() {
            let p_ab = joint[a * n + b];
            if p_ab > 0.0 && p_a > 0.0 && p_b > 0.0 {
                score += p_ab * ((p_ab / (p_a * p_b)).ln() / ln_base);
            }
        }
    }
    score
}
