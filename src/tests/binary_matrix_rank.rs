//! Binary matrix rank test - No. 5.
//!
//! Checks for linear dependence among fixed-length substrings of the sequence, interpreted as
//! 32x32 binary matrices.

use crate::gf2::Gf2Matrix;
use crate::internals::guard_score;
use crate::tests::timed_outcome;
use crate::{BitSequence, Test, TestOutcome};

pub const NAME: &str = "binary_matrix_rank";

const M: usize = 32;
const BLOCK_BITS: usize = M * M;

/// The minimum number of disjoint 32x32 blocks required, per NIST.
pub const MIN_BLOCK_COUNT: usize = 38;
/// The minimum input length, in bits, implied by [MIN_BLOCK_COUNT].
pub const MIN_INPUT_LENGTH: usize = MIN_BLOCK_COUNT * BLOCK_BITS;

/// Reference probabilities for rank == 32, rank == 31, and rank <= 30, derived from the
/// closed-form formula in NIST SP 800-22 §2.5.
const PROBABILITY_FULL: f64 = 0.2888;
const PROBABILITY_MINUS_ONE: f64 = 0.5776;
const PROBABILITY_REST: f64 = 1.0 - PROBABILITY_FULL - PROBABILITY_MINUS_ONE;

#[derive(Copy, Clone, Debug, Default)]
pub struct BinaryMatrixRank;

impl Test for BinaryMatrixRank {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_eligible(&self, bits: &BitSequence) -> bool {
        bits.len() / BLOCK_BITS >= MIN_BLOCK_COUNT
    }

    fn execute(&self, bits: &BitSequence) -> TestOutcome {
        timed_outcome(NAME, || vec![score(bits)])
    }
}

fn score(bits: &BitSequence) -> f64 {
    let block_count = bits.len() / BLOCK_BITS;

    let mut full = 0usize;
    let mut minus_one = 0usize;
    let mut rest = 0usize;

    for block in bits.as_slice().chunks_exact(BLOCK_BITS).take(block_count) {
        let rank = Gf2Matrix::from_flat_bits(block, M).rank();
        match rank {
            M => full += 1,
            r if r == M - 1 => minus_one += 1,
            _ => rest += 1,
        }
    }

    let n = block_count as f64;
    let chi_square = (full as f64 - PROBABILITY_FULL * n).powi(2) / (PROBABILITY_FULL * n)
        + (minus_one as f64 - PROBABILITY_MINUS_ONE * n).powi(2) / (PROBABILITY_MINUS_ONE * n)
        + (rest as f64 - PROBABILITY_REST * n).powi(2) / (PROBABILITY_REST * n);

    let (chi_square, degenerate) = guard_score(chi_square);
    if degenerate {
        return 0.0;
    }

    (-chi_square / 2.0).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ineligible_below_minimum_block_count() {
        let bits = BitSequence::new(vec![0; 1000]).unwrap();
        assert!(!BinaryMatrixRank.is_eligible(&bits));
    }

    #[test]
    fn eligible_at_minimum_block_count() {
        let bits = BitSequence::new(vec![0; MIN_INPUT_LENGTH]).unwrap();
        assert!(BinaryMatrixRank.is_eligible(&bits));
    }

    #[test]
    fn all_zero_blocks_are_heavily_skewed_and_fail() {
        let bits = BitSequence::new(vec![0; MIN_INPUT_LENGTH]).unwrap();
        let outcome = BinaryMatrixRank.execute(&bits);
        assert!(!outcome.passed());
    }
}
