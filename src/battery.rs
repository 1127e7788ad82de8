//! The [Battery] type: an ordered, string-keyed collection of registered tests.

use crate::tests::{
    approximate_entropy::ApproximateEntropy, binary_matrix_rank::BinaryMatrixRank,
    cumulative_sums::CumulativeSums, dft::Dft, frequency_block::FrequencyWithinBlock,
    linear_complexity::LinearComplexity, longest_run_of_ones::LongestRunOfOnes,
    maurers_universal::MaurersUniversal, monobit::Monobit,
    non_overlapping_template_matching::NonOverlappingTemplateMatching,
    overlapping_template_matching::OverlappingTemplateMatching, random_excursion::RandomExcursion,
    random_excursion_variant::RandomExcursionVariant, runs::Runs, serial::Serial,
};
use crate::{BitSequence, Error, Test};
use std::sync::Arc;

/// An ordered collection of tests, keyed by name.
///
/// Iteration order always follows insertion order, never alphabetical or hash order - the
/// driver's "run in order" mode and the canonical [Battery::sp800_22r1a] registration order both
/// depend on this.
///
/// Entries are held behind an [Arc] rather than a `Box` so that [Battery::filter_eligible] can
/// build a new battery that shares the same test instances instead of needing `Test` to be
/// cloneable.
#[derive(Default, Clone)]
pub struct Battery {
    entries: Vec<(String, Arc<dyn Test>)>,
}

impl Battery {
    /// Builds an empty battery with no registered tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a test under its own [Test::name].
    ///
    /// Returns [Error::DuplicateTest] if a test with the same name is already registered.
    pub fn insert(&mut self, test: Box<dyn Test>) -> Result<(), Error> {
        let name = test.name().to_string();
        if self.get(&name).is_some() {
            return Err(Error::DuplicateTest(name));
        }
        self.entries.push((name, Arc::from(test)));
        Ok(())
    }

    /// Looks up a registered test by name.
    pub fn get(&self, name: &str) -> Option<&dyn Test> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, test)| test.as_ref())
    }

    /// Iterates over every registered test, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Test> {
        self.entries.iter().map(|(_, test)| test.as_ref())
    }

    /// The number of registered tests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this battery has no registered tests.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a new battery containing only the tests eligible for `bits`, preserving order.
    ///
    /// The returned battery shares its test instances with `self` - this is a cheap filter, not a
    /// deep copy.
    pub fn filter_eligible(&self, bits: &BitSequence) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, test)| test.is_eligible(bits))
                .cloned()
                .collect(),
        }
    }

    /// Builds the canonical NIST SP 800-22 Revision 1a battery, with all 15 tests registered in
    /// the order they appear in the standard.
    pub fn sp800_22r1a() -> Self {
        let mut battery = Self::new();
        // registration can only fail on a duplicate name, and every name below is distinct and
        // registered exactly once.
        battery.insert(Box::new(Monobit)).expect("monobit is registered exactly once");
        battery
            .insert(Box::new(FrequencyWithinBlock::default()))
            .expect("frequency_within_block is registered exactly once");
        battery.insert(Box::new(Runs)).expect("runs is registered exactly once");
        battery
            .insert(Box::new(LongestRunOfOnes))
            .expect("longest_run_ones_in_a_block is registered exactly once");
        battery
            .insert(Box::new(BinaryMatrixRank))
            .expect("binary_matrix_rank is registered exactly once");
        battery.insert(Box::new(Dft)).expect("dft is registered exactly once");
        battery
            .insert(Box::new(NonOverlappingTemplateMatching::default()))
            .expect("non_overlapping_template_matching is registered exactly once");
        battery
            .insert(Box::new(OverlappingTemplateMatching))
            .expect("overlapping_template_matching is registered exactly once");
        battery
            .insert(Box::new(MaurersUniversal))
            .expect("maurers_universal is registered exactly once");
        battery
            .insert(Box::new(LinearComplexity))
            .expect("linear_complexity is registered exactly once");
        battery.insert(Box::new(Serial)).expect("serial is registered exactly once");
        battery
            .insert(Box::new(ApproximateEntropy))
            .expect("approximate_entropy is registered exactly once");
        battery
            .insert(Box::new(CumulativeSums))
            .expect("cumulative sums is registered exactly once");
        battery
            .insert(Box::new(RandomExcursion))
            .expect("random_excursion is registered exactly once");
        battery
            .insert(Box::new(RandomExcursionVariant))
            .expect("random_excursion_variant is registered exactly once");
        battery
    }
}
