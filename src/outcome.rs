//! The result value type produced by every test's `execute`.

use crate::ALPHA;
use std::time::Duration;

/// An immutable record of one test execution.
///
/// Named `TestOutcome` rather than `Result`, since the latter collides with
/// [std::result::Result] - the same naming pressure the upstream implementation this crate is
/// derived from resolved the same way.
#[derive(Clone, Debug)]
pub struct TestOutcome {
    test_name: String,
    scores: Vec<f64>,
    passed: bool,
    elapsed: Duration,
}

impl TestOutcome {
    /// Builds an outcome from the test's full score vector (never truncated to the aggregate).
    ///
    /// `passed` is derived here, not passed in: a test passes iff every score in the vector is
    /// `>= ALPHA`. An empty score vector is considered passed vacuously - no kernel in this
    /// crate produces one, but the invariant is defined regardless.
    pub fn new(test_name: impl Into<String>, scores: Vec<f64>, elapsed: Duration) -> Self {
        let passed = scores.iter().all(|&score| score >= ALPHA);

        Self {
            test_name: test_name.into(),
            scores,
            passed,
            elapsed,
        }
    }

    /// The test's canonical name, as registered in the battery.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Whether every P-value in [Self::scores] met the significance threshold.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// The full score vector - one entry per P-value the test produced.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// The arithmetic mean of the finite entries of [Self::scores].
    ///
    /// `NaN` entries are ignored; if every entry is `NaN`, the result is `NaN`.
    pub fn score(&self) -> f64 {
        let finite: Vec<f64> = self.scores.iter().copied().filter(|s| s.is_finite()).collect();

        if finite.is_empty() {
            f64::NAN
        } else {
            finite.iter().sum::<f64>() / (finite.len() as f64)
        }
    }

    /// How long [crate::test_trait::Test::execute] took to produce this outcome.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
