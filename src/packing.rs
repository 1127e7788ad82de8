//! Conversion helpers between byte arrays and [BitSequence]s.
//!
//! Bit-packing is explicitly out of the core's scope - the hard engineering in this crate is the
//! fifteen kernels, not these helpers - but the library boundary still needs them, so they are
//! kept small and simple rather than optimised.

use crate::{BitSequence, Error};

const BYTE_SIZE: usize = 8;

/// Unpacks each byte (interpreted unsigned) into 8 bits, most-significant bit first.
pub fn pack_sequence(bytes: &[u8]) -> BitSequence {
    let mut bits = Vec::with_capacity(bytes.len() * BYTE_SIZE);

    for &byte in bytes {
        for shift in (0..BYTE_SIZE).rev() {
            bits.push((byte >> shift) & 0x01);
        }
    }

    // every element pushed above is 0 or 1 by construction.
    BitSequence::new(bits).expect("bits extracted from bytes are always 0 or 1")
}

/// The inverse of [pack_sequence]: packs 8 bits (most-significant first) into each output byte.
///
/// Returns [Error::UnpackLengthNotByteAligned] if the sequence's length is not a multiple of 8.
pub fn unpack_sequence(bits: &BitSequence) -> Result<Vec<u8>, Error> {
    if bits.len() % BYTE_SIZE != 0 {
        return Err(Error::UnpackLengthNotByteAligned(bits.len()));
    }

    let bytes = bits
        .as_slice()
        .chunks_exact(BYTE_SIZE)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit))
        .collect();

    Ok(bytes)
}
