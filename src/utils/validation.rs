//! Parameter validation.

use crate::core::types::BlastParams;

/// Seed used when none is given, so fixtures are reproducible by default
pub const DEFAULT_SEED: u64 = 41;

/// Smallest segment a caller may ask for, before overlaps are added
pub const MIN_SEGMENT_LENGTH: i64 = 1;

/// Segment counts must be strictly greater than this
pub const MIN_SEGMENTS_EXCLUSIVE: i64 = 3;

/// Upper bound on the buffer reserved up front when reading a fixture header
pub const MAX_PREALLOCATED_STRANDS: usize = 100_000;

/// Parameter validation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is not an integer")]
    NotAnInteger(String),

    #[error("the number of segments must lie strictly between {MIN_SEGMENTS_EXCLUSIVE} and {upper} (got {got})")]
    SegmentCount { got: i64, upper: i64 },

    #[error("overlaps must lie in [1,{max_allowed}] (got min {min_overlap}, max {max_overlap})")]
    OverlapBounds {
        min_overlap: i64,
        max_overlap: i64,
        max_allowed: i64,
    },
}

/// Parse an optional overlap argument as a signed integer
///
/// # Errors
///
/// Returns `ValidationError::NotAnInteger` for anything `i64` cannot parse.
pub fn parse_integer(value: Option<&str>) -> Result<Option<i64>, ValidationError> {
    value
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ValidationError::NotAnInteger(v.to_string()))
        })
        .transpose()
}

/// Check that `3 < segments < length`
///
/// # Errors
///
/// Returns `ValidationError::SegmentCount` when the count is out of range.
pub fn validate_segments(length: i64, segments: i64) -> Result<(), ValidationError> {
    let upper = length / MIN_SEGMENT_LENGTH;
    if segments <= MIN_SEGMENTS_EXCLUSIVE || segments >= upper {
        return Err(ValidationError::SegmentCount {
            got: segments,
            upper,
        });
    }
    Ok(())
}

/// Check raw command-line values and turn them into [`BlastParams`].
///
/// `min_overlap` defaults to 1 and `max_overlap` to one less than the segment
/// size (`length / segments`).
///
/// # Errors
///
/// Returns `ValidationError::SegmentCount` unless `3 < segments < length`, and
/// `ValidationError::OverlapBounds` unless `1 <= min <= max < length / segments`.
///
/// # Examples
///
/// ```
/// use string_blaster::utils::validation::{validate_params, ValidationError};
///
/// let params = validate_params(1000, 10, Some(1), Some(40), 41).unwrap();
/// assert_eq!(params.segment_size(), 100);
///
/// assert!(matches!(
///     validate_params(1000, 3, None, None, 41),
///     Err(ValidationError::SegmentCount { .. })
/// ));
/// ```
pub fn validate_params(
    length: i64,
    segments: i64,
    min_overlap: Option<i64>,
    max_overlap: Option<i64>,
    seed: u64,
) -> Result<BlastParams, ValidationError> {
    validate_segments(length, segments)?;

    let segment_size = length / segments;
    let min_overlap = min_overlap.unwrap_or(1);
    let max_overlap = max_overlap.unwrap_or(segment_size - 1);

    if min_overlap < 1
        || min_overlap >= segment_size
        || max_overlap >= segment_size
        || max_overlap < min_overlap
    {
        return Err(ValidationError::OverlapBounds {
            min_overlap,
            max_overlap,
            max_allowed: segment_size - 1,
        });
    }

    // All values are now known to be positive and smaller than `length`
    let to_usize = |v: i64| usize::try_from(v).unwrap_or_default();
    Ok(BlastParams {
        length: to_usize(length),
        segments: to_usize(segments),
        min_overlap: to_usize(min_overlap),
        max_overlap: to_usize(max_overlap),
        seed,
    })
}
