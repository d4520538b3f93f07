//! Random original-string generation.

use std::collections::TryReserveError;

use rand::Rng;

use crate::core::types::Nucleotide;

/// Draw `length` bases uniformly from [`Nucleotide::ALPHABET`].
///
/// # Errors
///
/// Returns the allocator's refusal if `length` bytes cannot be reserved.
pub fn random_sequence<R: Rng>(rng: &mut R, length: usize) -> Result<String, TryReserveError> {
    let mut sequence = String::new();
    sequence.try_reserve_exact(length)?;
    sequence.extend((0..length).map(|_| {
        let base = Nucleotide::ALPHABET[rng.gen_range(0..Nucleotide::ALPHABET.len())];
        char::from(base.as_byte())
    }));
    Ok(sequence)
}

/// Lowercase hex MD5 of a sequence, the same checksum SAM headers carry in `M5`
#[must_use]
pub fn sequence_md5(sequence: &str) -> String {
    format!("{:x}", md5::compute(sequence.as_bytes()))
}
