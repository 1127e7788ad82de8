//! The fifteen NIST SP 800-22r1a test kernels (C7), one module each.

pub mod binary_matrix_rank;
pub mod cumulative_sums;

use crate::TestOutcome;
use std::time::Instant;

/// Times `f` and wraps its score vector into a [TestOutcome] - every kernel's `execute` ends
/// with a call to this, so the elapsed-duration bookkeeping lives in exactly one place.
pub(crate) fn timed_outcome(test_name: &'static str, f: impl FnOnce() -> Vec<f64>) -> TestOutcome {
    let start = Instant::now();
    let scores = f();
    let elapsed = start.elapsed();

    tracing::debug!(test = test_name, ?scores, ?elapsed, "test kernel finished");

    TestOutcome::new(test_name, scores, elapsed)
}
