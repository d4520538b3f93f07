//! Fixture generation for suffix-prefix overlap solvers.
//!
//! The pipeline is a single pass driven by one seeded generator:
//!
//! 1. Draw the original string ([`random_sequence`])
//! 2. Cut it into `k` segments ([`partition::partition`])
//! 3. Copy overlaps from neighbouring segments ([`overlap::build_strands`])
//! 4. Shuffle the strands and write them out ([`output::write_fixture`])
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use string_blaster::blast::blast_string;
//! use string_blaster::core::types::BlastParams;
//!
//! let params = BlastParams { length: 1000, segments: 10, min_overlap: 1, max_overlap: 40, seed: 41 };
//! let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
//! let blasted = blast_string(&params, &mut rng).unwrap();
//!
//! assert_eq!(blasted.strands.len(), 10);
//! assert_eq!(blasted.reassemble(), blasted.original);
//! ```

use std::collections::TryReserveError;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::core::sequence::{random_sequence, sequence_md5};
use crate::core::types::{BlastParams, Strand};

pub mod output;
pub mod overlap;
pub mod partition;

/// An original string and the strands cut from it, in generation order
#[derive(Debug, Clone)]
pub struct BlastedString {
    pub original: String,
    pub strands: Vec<Strand>,
}

impl BlastedString {
    /// Concatenate strand cores in generation order
    #[must_use]
    pub fn reassemble(&self) -> String {
        self.strands.iter().map(Strand::core).collect()
    }

    /// Strands in a random order, the order they are written in
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Vec<&Strand> {
        let mut order: Vec<&Strand> = self.strands.iter().collect();
        order.shuffle(rng);
        order
    }
}

/// Generate the original string and its strands.
///
/// `params` is expected to have passed
/// [`validate_params`](crate::utils::validation::validate_params).
///
/// # Errors
///
/// Returns a [`TryReserveError`] if the original string does not fit in memory.
pub fn blast_string<R: Rng>(
    params: &BlastParams,
    rng: &mut R,
) -> Result<BlastedString, TryReserveError> {
    let original = random_sequence(rng, params.length)?;
    debug!(
        length = original.len(),
        md5 = %sequence_md5(&original),
        "generated original string"
    );

    let segments = partition::partition(&original, params.segments);
    debug!(
        segments = segments.len(),
        segment_size = params.segment_size(),
        last_segment = segments.last().map_or(0, |s| s.len()),
        "partitioned original string"
    );

    let strands = overlap::build_strands(&segments, params.min_overlap, params.max_overlap, rng);

    Ok(BlastedString { original, strands })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn params(length: usize, segments: usize, min: usize, max: usize) -> BlastParams {
        BlastParams {
            length,
            segments,
            min_overlap: min,
            max_overlap: max,
            seed: 41,
        }
    }

    #[test]
    fn test_blast_string_counts() {
        let p = params(1000, 10, 1, 40);
        let blasted = blast_string(&p, &mut ChaCha8Rng::seed_from_u64(p.seed)).unwrap();
        assert_eq!(blasted.original.len(), 1000);
        assert_eq!(blasted.strands.len(), 10);
        assert_eq!(blasted.reassemble(), blasted.original);
    }

    #[test]
    fn test_blast_string_uneven_length() {
        let p = params(1037, 7, 2, 30);
        let blasted = blast_string(&p, &mut ChaCha8Rng::seed_from_u64(p.seed)).unwrap();
        assert_eq!(blasted.strands.len(), 7);
        assert_eq!(blasted.reassemble(), blasted.original);
        // 1037 / 7 = 148 rem 1
        assert_eq!(blasted.strands.last().unwrap().core().len(), 149);
    }

    #[test]
    fn test_blast_string_deterministic() {
        let p = params(500, 5, 1, 20);
        let a = blast_string(&p, &mut ChaCha8Rng::seed_from_u64(41)).unwrap();
        let b = blast_string(&p, &mut ChaCha8Rng::seed_from_u64(41)).unwrap();
        assert_eq!(a.original, b.original);
        assert_eq!(a.strands, b.strands);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let p = params(1000, 10, 1, 40);
        let mut rng = ChaCha8Rng::seed_from_u64(p.seed);
        let blasted = blast_string(&p, &mut rng).unwrap();
        let shuffled = blasted.shuffled(&mut rng);

        assert_eq!(shuffled.len(), blasted.strands.len());
        for strand in &blasted.strands {
            assert!(shuffled.contains(&strand));
        }
    }
}
