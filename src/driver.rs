//! Orchestrates running a [Battery] against a [BitSequence] in the three supported modes: run
//! every test, run every test in registration order (stopping at the first failure), or run a
//! single named test.

use crate::{Battery, BitSequence, Error, TestOutcome};
use tracing::{debug, info};

/// Runs every test in `battery` against `bits`, in battery order.
///
/// The result is always exactly `battery.len()` long: index `i` corresponds to the `i`-th
/// registered test. When `check_eligibility` is `true` (the common case), an entry is `None` iff
/// that test's `is_eligible` returned `false` for `bits` - it is never run. When `false`, every
/// test is executed unconditionally and every entry is `Some`, even for sequences a test was not
/// designed for.
pub fn run_all_battery(
    battery: &Battery,
    bits: &BitSequence,
    check_eligibility: bool,
) -> Vec<Option<TestOutcome>> {
    info!(sequence_len = bits.len(), battery_len = battery.len(), "running all tests");

    battery
        .iter()
        .map(|test| {
            if check_eligibility && !test.is_eligible(bits) {
                debug!(test = test.name(), "skipping ineligible test");
                return None;
            }
            debug!(test = test.name(), "running test");
            Some(test.execute(bits))
        })
        .collect()
}

/// Runs tests in `battery` strictly in registration order, stopping as soon as one produces a
/// failing [TestOutcome].
///
/// Ineligible tests (when `check_eligibility` is `true`) are recorded as `None` and do not count
/// as a failure - the scan continues past them. The returned vector is a prefix of
/// `battery`'s entries: shorter than `battery.len()` iff a failing outcome was found before the
/// end, with the failing outcome as its last element.
pub fn run_in_order_battery(
    battery: &Battery,
    bits: &BitSequence,
    check_eligibility: bool,
) -> Vec<Option<TestOutcome>> {
    info!(sequence_len = bits.len(), battery_len = battery.len(), "running tests in order");

    let mut outcomes = Vec::with_capacity(battery.len());

    for test in battery.iter() {
        if check_eligibility && !test.is_eligible(bits) {
            debug!(test = test.name(), "skipping ineligible test");
            outcomes.push(None);
            continue;
        }

        debug!(test = test.name(), "running test");
        let outcome = test.execute(bits);
        let failed = !outcome.passed();
        outcomes.push(Some(outcome));

        if failed {
            info!(test = test.name(), "stopping at first failing test");
            break;
        }
    }

    outcomes
}

/// Runs a single test, looked up by name.
///
/// Returns `Ok(None)` if `check_eligibility` is `true` and the test is not eligible for `bits`,
/// and [Error::UnknownTest] if no test with that name is registered.
pub fn run_by_name_battery(
    battery: &Battery,
    name: &str,
    bits: &BitSequence,
    check_eligibility: bool,
) -> Result<Option<TestOutcome>, Error> {
    let test = battery.get(name).ok_or_else(|| Error::UnknownTest(name.to_string()))?;

    if check_eligibility && !test.is_eligible(bits) {
        debug!(test = name, "test is not eligible for this sequence");
        return Ok(None);
    }

    info!(test = name, sequence_len = bits.len(), "running test");
    Ok(Some(test.execute(bits)))
}

/// Builds a new battery containing only the tests eligible for `bits`, preserving registration
/// order.
pub fn check_eligibility_all_battery(battery: &Battery, bits: &BitSequence) -> Battery {
    battery.filter_eligible(bits)
}

/// Reports whether a single named test is eligible for `bits`.
///
/// Returns [Error::UnknownTest] if no test with that name is registered.
pub fn check_eligibility_by_name_battery(
    battery: &Battery,
    name: &str,
    bits: &BitSequence,
) -> Result<bool, Error> {
    let test = battery.get(name).ok_or_else(|| Error::UnknownTest(name.to_string()))?;
    Ok(test.is_eligible(bits))
}
