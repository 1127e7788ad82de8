//! Integration-style tests exercising the [crate::Battery] and [crate::driver] together, rather
//! than a single kernel in isolation.

use crate::{driver, packing, Battery, BitSequence};

/// A short, non-degenerate sequence eligible for the length-agnostic tests only.
fn short_sequence() -> BitSequence {
    BitSequence::from_ascii(&"1011010101".repeat(10)).unwrap()
}

#[test]
fn eligibility_gates_correctly_for_a_short_sequence() {
    let battery = Battery::sp800_22r1a();
    let bits = short_sequence();

    let filtered = driver::check_eligibility_all_battery(&battery, &bits);
    let eligible: Vec<&str> = filtered.iter().map(crate::Test::name).collect();

    assert!(eligible.contains(&"monobit"));
    // a 100-bit sequence is nowhere near the 1,000,000-bit minimum this test requires.
    assert!(!eligible.contains(&"linear_complexity"));
}

#[test]
fn run_all_battery_preserves_battery_length_with_none_for_ineligible_tests() {
    let battery = Battery::sp800_22r1a();
    let bits = short_sequence();

    let outcomes = driver::run_all_battery(&battery, &bits, true);
    let eligible_count = driver::check_eligibility_all_battery(&battery, &bits).len();

    assert_eq!(outcomes.len(), battery.len());
    assert_eq!(outcomes.iter().filter(|o| o.is_some()).count(), eligible_count);
}

#[test]
fn pack_and_unpack_round_trip_through_the_battery_boundary() {
    let original = vec![0b1011_0101u8, 0b0000_1111u8];
    let packed = packing::pack_sequence(&original);
    assert_eq!(packed.len(), 16);

    let unpacked = packing::unpack_sequence(&packed).unwrap();
    assert_eq!(unpacked, original);
}

#[test]
fn a_heavily_biased_sequence_fails_monobit_but_the_battery_still_runs_to_completion() {
    let battery = Battery::sp800_22r1a();
    let bits = BitSequence::new(vec![1; 1000]).unwrap();

    let outcomes = driver::run_all_battery(&battery, &bits, true);
    let monobit = outcomes
        .into_iter()
        .flatten()
        .find(|o| o.test_name() == "monobit")
        .unwrap();
    assert!(!monobit.passed());
}

#[test]
fn run_in_order_stops_as_soon_as_a_test_fails() {
    let battery = Battery::sp800_22r1a();
    let bits = BitSequence::new(vec![1; 1000]).unwrap();

    let outcomes = driver::run_in_order_battery(&battery, &bits, true);
    // monobit is first in registration order and fails hard on an all-ones sequence.
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].as_ref().unwrap().passed());
}
