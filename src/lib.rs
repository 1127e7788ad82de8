#![doc = include_str!("../README.md")]

use thiserror::Error;

// internal usage only
pub(crate) mod internals;
#[cfg(test)]
mod unit_tests;

// public exports
pub mod battery;
pub mod berlekamp_massey;
pub mod bitseq;
pub mod driver;
pub mod gf2;
pub mod outcome;
pub mod packing;
pub mod templates;
pub mod test_trait;
pub mod tests;

pub use battery::Battery;
pub use bitseq::BitSequence;
pub use outcome::TestOutcome;
pub use test_trait::Test;

/// Significance level α used by every test in the battery, as recommended by NIST.
pub const ALPHA: f64 = 0.01;

/// The error type for all contract violations detectable by this crate.
///
/// Numerical degeneracy (a zero χ², a degenerate random walk) is *not* represented here -
/// per the test contract, it always surfaces as a failing [TestOutcome] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller asked the battery to run or check a test name it does not contain.
    #[error("no test named {0:?} is registered in this battery")]
    UnknownTest(String),
    /// A [BitSequence] was constructed from a value outside {0,1}.
    #[error("value {0} at index {1} is not a valid bit (expected 0 or 1)")]
    InvalidBitValue(u8, usize),
    /// `unpack_sequence` was called on a sequence whose length is not a multiple of 8.
    #[error("cannot unpack {0} bits into whole bytes")]
    UnpackLengthNotByteAligned(usize),
    /// The battery already contains a test registered under this id.
    #[error("a test named {0:?} is already registered in this battery")]
    DuplicateTest(String),
    /// Propagated from the gamma function for out-of-domain parameters; unreachable through any
    /// currently exposed kernel, kept for parity with the upstream statistics crate's own
    /// fallibility.
    #[error(transparent)]
    GammaFunctionFailed(#[from] statrs::StatsError),
}
