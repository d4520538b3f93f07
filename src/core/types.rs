/// A base of the synthetic genome alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    T,
    C,
    G,
}

impl Nucleotide {
    /// Sampling order used by the generator. Changing it changes every fixture.
    pub const ALPHABET: [Nucleotide; 4] = [Self::A, Self::T, Self::C, Self::G];

    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::T => b'T',
            Self::C => b'C',
            Self::G => b'G',
        }
    }

    #[must_use]
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'A' => Some(Self::A),
            b'T' => Some(Self::T),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            _ => None,
        }
    }
}

impl std::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self.as_byte()))
    }
}

/// Validated generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlastParams {
    /// Length of the original string
    pub length: usize,

    /// Number of segments (and strands) to produce
    pub segments: usize,

    /// Smallest overlap length, inclusive
    pub min_overlap: usize,

    /// Largest overlap length, inclusive
    pub max_overlap: usize,

    /// Seed for the single generator used by the whole run
    pub seed: u64,
}

impl BlastParams {
    /// Size of every segment but the last, which also absorbs the remainder.
    #[must_use]
    pub fn segment_size(&self) -> usize {
        self.length / self.segments
    }
}

/// A segment with the overlap fragments borrowed from its neighbours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strand {
    /// Full strand text: left overlap, core, right overlap
    pub sequence: String,

    /// Characters copied from the end of the previous segment
    pub left_overlap: usize,

    /// Characters copied from the start of the next segment
    pub right_overlap: usize,
}

impl Strand {
    /// The segment this strand was built from, without overlaps
    #[must_use]
    pub fn core(&self) -> &str {
        &self.sequence[self.left_overlap..self.sequence.len() - self.right_overlap]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleotide_byte_roundtrip() {
        for base in Nucleotide::ALPHABET {
            assert_eq!(Nucleotide::from_byte(base.as_byte()), Some(base));
        }
        assert_eq!(Nucleotide::from_byte(b'N'), None);
        assert_eq!(Nucleotide::from_byte(b'a'), None);
    }

    #[test]
    fn test_segment_size_truncates() {
        let params = BlastParams {
            length: 1003,
            segments: 10,
            min_overlap: 1,
            max_overlap: 40,
            seed: 41,
        };
        assert_eq!(params.segment_size(), 100);
    }

    #[test]
    fn test_strand_core_strips_overlaps() {
        let strand = Strand {
            sequence: "GGACGTAC".to_string(),
            left_overlap: 2,
            right_overlap: 1,
        };
        assert_eq!(strand.core(), "ACGTA");
        assert_eq!(strand.len(), 8);

        let bare = Strand {
            sequence: "ACGT".to_string(),
            left_overlap: 0,
            right_overlap: 0,
        };
        assert_eq!(bare.core(), "ACGT");
    }
}
