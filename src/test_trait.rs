//! The uniform contract every test kernel implements.

use crate::{BitSequence, TestOutcome};

/// The capability set every SP 800-22 test exposes.
///
/// Implementations are expected to be cheap to construct and to hold no per-call state visible
/// to the caller.
pub trait Test: Send + Sync {
    /// The test's canonical identifier, matching its key in the [crate::battery::Battery] it is
    /// registered under.
    fn name(&self) -> &'static str;

    /// A cheap size/shape precondition. `false` means [Test::execute] must not be called - the
    /// driver substitutes a `None` in its place instead.
    fn is_eligible(&self, bits: &BitSequence) -> bool;

    /// Computes the test's full score vector and wraps it into a [TestOutcome].
    ///
    /// Callers must check [Test::is_eligible] first. Implementations assume it holds and do not
    /// re-validate it - calling this on an ineligible sequence produces an unspecified (but not
    /// undefined-behaviour-unsafe) result, typically a degenerate failing outcome.
    fn execute(&self, bits: &BitSequence) -> TestOutcome;
}
