//! Internal numerical helpers shared by the test kernels - can be changed anytime.

use statrs::distribution::{ContinuousCDF, Normal};
use std::sync::LazyLock;

/// The complementary error function, `erfc(x) = 1 - erf(x)`.
pub(crate) use statrs::function::erf::erfc;

/// igamc, the upper regularized incomplete gamma function: `Q(a, x)`.
pub(crate) use statrs::function::gamma::checked_gamma_ur as igamc;

/// The standard normal distribution, used by the cumulative sums test for `Phi`.
static STANDARD_NORMAL: LazyLock<Normal> =
    LazyLock::new(|| Normal::new(0.0, 1.0).expect("standard normal parameters are always valid"));

/// The standard normal cumulative distribution function `Phi(x)`.
pub(crate) fn standard_normal_cdf(x: f64) -> f64 {
    STANDARD_NORMAL.cdf(x)
}

/// Folds a raw score into the failure-by-degeneracy contract (§7): a non-finite score is never
/// propagated as an error, it is reported as a failing, zero-score result instead.
///
/// Returns `(score, degenerate)`.
pub(crate) fn guard_score(value: f64) -> (f64, bool) {
    if value.is_finite() {
        (value, false)
    } else {
        (0.0, true)
    }
}

/// Converts a chi-square statistic into a P-value via `Q(a, chi_square / 2)`.
///
/// `a` is the gamma function's shape parameter as used throughout the NIST formulas (half the
/// degrees of freedom, e.g. `N_b / 2` or `K / 2`) - callers pass it pre-halved, matching the NIST
/// notation `Q(dof/2, chi^2/2)` directly.
///
/// `igamc` can itself fail for out-of-domain parameters (it shouldn't, for the fixed shape
/// parameters every kernel in this crate uses) - if it does, that is numerical degeneracy too,
/// not a contract violation, so it is folded into a zero score rather than bubbled up as
/// [crate::Error].
pub(crate) fn p_value_from_chi_square(a: f64, chi_square: f64) -> f64 {
    if !chi_square.is_finite() || chi_square < 0.0 {
        return 0.0;
    }

    igamc(a, chi_square / 2.0).unwrap_or(0.0)
}
