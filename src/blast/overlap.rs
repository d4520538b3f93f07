use rand::Rng;
use tracing::debug;

use crate::core::types::Strand;

/// Attach overlaps to every segment.
///
/// The first strand always gets a right overlap and the last strand always
/// gets a left overlap. Interior strands always get a left overlap and get a
/// right overlap on a fair coin flip, which leaves gaps in the suffix-prefix
/// graph. Each overlap length is drawn independently from
/// `min_overlap..=max_overlap` and clamped to the neighbour it is copied from.
///
/// # Panics
///
/// Panics if `min_overlap > max_overlap` and there is more than one segment.
pub fn build_strands<R: Rng>(
    segments: &[&str],
    min_overlap: usize,
    max_overlap: usize,
    rng: &mut R,
) -> Vec<Strand> {
    let last = segments.len().saturating_sub(1);
    let mut strands = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().enumerate() {
        let left_overlap = if i > 0 {
            rng.gen_range(min_overlap..=max_overlap).min(segments[i - 1].len())
        } else {
            0
        };

        let has_right = i < last && (i == 0 || rng.gen_bool(0.5));
        let right_overlap = if has_right {
            rng.gen_range(min_overlap..=max_overlap).min(segments[i + 1].len())
        } else {
            0
        };

        let mut sequence = String::with_capacity(left_overlap + segment.len() + right_overlap);
        if left_overlap > 0 {
            let prev = segments[i - 1];
            sequence.push_str(&prev[prev.len() - left_overlap..]);
        }
        sequence.push_str(segment);
        if right_overlap > 0 {
            sequence.push_str(&segments[i + 1][..right_overlap]);
        }

        debug!(
            strand = i,
            core = segment.len(),
            left_overlap,
            right_overlap,
            "built strand"
        );

        strands.push(Strand {
            sequence,
            left_overlap,
            right_overlap,
        });
    }

    strands
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::blast::partition::partition;
    use crate::core::sequence::random_sequence;

    fn strands_for(
        length: usize,
        count: usize,
        min: usize,
        max: usize,
        seed: u64,
    ) -> (String, Vec<Strand>) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let original = random_sequence(&mut rng, length).unwrap();
        let strands = build_strands(&partition(&original, count), min, max, &mut rng);
        (original, strands)
    }

    #[test]
    fn test_cores_reconstruct_original() {
        let (original, strands) = strands_for(1000, 10, 1, 40, 41);
        let rebuilt: String = strands.iter().map(Strand::core).collect();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_end_strands() {
        for seed in 0..20 {
            let (_, strands) = strands_for(400, 8, 2, 9, seed);
            let first = &strands[0];
            let last = strands.last().unwrap();
            assert_eq!(first.left_overlap, 0);
            assert!(first.right_overlap >= 2);
            assert_eq!(last.right_overlap, 0);
            assert!(last.left_overlap >= 2);
        }
    }

    #[test]
    fn test_interior_strands_always_have_left_overlap() {
        let (_, strands) = strands_for(1000, 10, 1, 40, 41);
        for strand in &strands[1..] {
            assert!((1..=40).contains(&strand.left_overlap));
        }
    }

    #[test]
    fn test_right_overlap_is_sometimes_skipped() {
        // With 48 interior coin flips both outcomes are all but certain
        let (_, strands) = strands_for(5000, 50, 1, 10, 41);
        let interior = &strands[1..strands.len() - 1];
        assert!(interior.iter().any(|s| s.right_overlap == 0));
        assert!(interior.iter().any(|s| s.right_overlap > 0));
    }

    #[test]
    fn test_overlaps_copy_neighbours() {
        let (original, strands) = strands_for(600, 6, 3, 20, 5);
        let segments = partition(&original, 6);
        for (i, strand) in strands.iter().enumerate() {
            if strand.left_overlap > 0 {
                let prev = segments[i - 1];
                assert!(strand
                    .sequence
                    .starts_with(&prev[prev.len() - strand.left_overlap..]));
            }
            if strand.right_overlap > 0 {
                assert!(strand
                    .sequence
                    .ends_with(&segments[i + 1][..strand.right_overlap]));
            }
            // Overlaps keep the strand a contiguous piece of the original
            assert!(original.contains(&strand.sequence));
        }
    }

    #[test]
    fn test_strand_length_bounds() {
        let (original, strands) = strands_for(1000, 10, 1, 40, 41);
        let segments = partition(&original, 10);
        for (strand, segment) in strands.iter().zip(&segments) {
            assert!(strand.len() >= segment.len());
            assert!(strand.len() <= segment.len() + 2 * 40);
        }
    }

    #[test]
    fn test_fixed_overlap_length() {
        let (_, strands) = strands_for(100, 5, 4, 4, 41);
        assert_eq!(strands[0].right_overlap, 4);
        for strand in &strands[1..] {
            assert_eq!(strand.left_overlap, 4);
            assert!(strand.right_overlap == 0 || strand.right_overlap == 4);
        }
    }
}
