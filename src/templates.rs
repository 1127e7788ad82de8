//! Aperiodic template tables (C6), used by the non-overlapping template matching test.
//!
//! Rather than transcribing NIST's Appendix B template tables from memory - which risks silent
//! transcription errors presenting as bit-exact parity when they are not - the template set for
//! a given length is generated: a bit string of length `m` is included iff none of its `m - 1`
//! non-trivial cyclic rotations equals itself. See DESIGN.md and SPEC_FULL.md §9 for the
//! rationale; this reproduces NIST's published count at the smallest lengths (2 templates for
//! `m = 2`) and is a superset at larger `m`.

use std::sync::Mutex;
use std::{collections::HashMap, sync::LazyLock};

/// The smallest supported template length.
pub const MIN_TEMPLATE_LEN: usize = 2;
/// The largest supported template length (per the non-overlapping template matching test).
pub const MAX_TEMPLATE_LEN: usize = 8;

/// Per-length template cache - generation is `O(2^m * m)`, cheap to redo but pointless to repeat
/// across calls for the same `m`.
static CACHE: LazyLock<Mutex<HashMap<usize, &'static [Vec<u8>]>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns every aperiodic template of length `m`, each as a `0`/`1` bit vector.
///
/// Panics if `m` is outside `[MIN_TEMPLATE_LEN, MAX_TEMPLATE_LEN]`.
pub fn templates_of_length(m: usize) -> &'static [Vec<u8>] {
    assert!(
        (MIN_TEMPLATE_LEN..=MAX_TEMPLATE_LEN).contains(&m),
        "template length {m} outside supported range [{MIN_TEMPLATE_LEN}, {MAX_TEMPLATE_LEN}]"
    );

    let mut cache = CACHE.lock().expect("template cache mutex poisoned");
    if let Some(&templates) = cache.get(&m) {
        return templates;
    }

    let generated: &'static [Vec<u8>] = Vec::leak(generate_aperiodic_templates(m));
    cache.insert(m, generated);
    generated
}

fn generate_aperiodic_templates(m: usize) -> Vec<Vec<u8>> {
    (0u32..(1u32 << m))
        .filter(|&pattern| is_aperiodic(pattern, m))
        .map(|pattern| (0..m).rev().map(|bit| ((pattern >> bit) & 1) as u8).collect())
        .collect()
}

/// A pattern is aperiodic iff no non-trivial cyclic rotation of it equals itself.
fn is_aperiodic(pattern: u32, m: usize) -> bool {
    let mask = (1u32 << m) - 1;
    (1..m).all(|shift| rotate_left(pattern, shift, m, mask) != pattern)
}

fn rotate_left(pattern: u32, shift: usize, m: usize, mask: u32) -> u32 {
    ((pattern << shift) | (pattern >> (m - shift))) & mask
}
