//! Command-line interface for string-blaster.
//!
//! ## Usage
//!
//! ```text
//! # 10 strands cut from a 1000-base string, overlaps of 1 to 40 bases
//! string-blaster out.dat 1000 10 1 40
//!
//! # Write to stdout with the default overlap range [1, strlen/k - 1]
//! string-blaster - 1000 10
//!
//! # Gzip the fixture and pick another seed
//! string-blaster --seed 7 out.dat.gz 100000 250 20 80
//! ```
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Usage error or help |
//! | 2 | An argument is not an integer |
//! | 3 | Segment count out of range |
//! | 4 | Overlap bounds out of range |
//! | 5 | Output path not writable |
//! | 6 | Any other failure |

use std::collections::TryReserveError;
use std::io;

use clap::error::ErrorKind;
use clap::Parser;

use crate::blast::output::Destination;
use crate::utils::validation::{ValidationError, DEFAULT_SEED};

pub mod generate;

#[derive(Parser, Debug)]
#[command(name = "string-blaster")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Generate suffix-prefix overlap fixtures from a random string")]
#[command(
    long_about = "Create a random string of STRLEN bases from {A,T,C,G} and split it into K substrings L_1..L_K.\n\nEach substring L_i gets an overlap with L_{i-1} and, with probability 0.5, an overlap with L_{i+1}. Overlap sizes are drawn uniformly from [MIN_OV, MAX_OV].\n\nThe output holds:\n- the number K\n- the K substrings in random order, one per line\n- the original string\n\nMIN_OV defaults to 1 and MAX_OV to STRLEN/K - 1. If FILENAME is '-' the fixture goes to stdout; a FILENAME ending in .gz is gzip-compressed."
)]
pub struct Cli {
    /// Output file, or '-' for stdout
    pub filename: String,

    /// Length of the random string
    #[arg(allow_negative_numbers = true)]
    pub strlen: i64,

    /// Number of substrings to cut it into
    #[arg(allow_negative_numbers = true)]
    pub k: i64,

    // Kept as text and parsed after K is checked
    /// Minimum overlap length
    #[arg(allow_negative_numbers = true)]
    pub min_ov: Option<String>,

    /// Maximum overlap length (requires MIN_OV)
    #[arg(allow_negative_numbers = true)]
    pub max_ov: Option<String>,

    /// Seed for the random generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Exit code for a command line clap refused to parse
#[must_use]
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayVersion => 0,
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => 2,
        _ => 1,
    }
}

/// Everything that can stop a run, grouped by exit code
#[derive(Debug, thiserror::Error)]
pub enum BlastError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("the file {destination} cannot be opened for writing: {source}")]
    Unwritable {
        destination: Destination,
        #[source]
        source: io::Error,
    },

    #[error("cannot allocate a string of {length} bases: {source}")]
    Allocation {
        length: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("failed to write {destination}: {source}")]
    Io {
        destination: Destination,
        #[source]
        source: io::Error,
    },
}

impl BlastError {
    /// Classify an I/O error raised while opening or writing `destination`
    #[must_use]
    pub fn from_io(destination: &Destination, source: io::Error) -> Self {
        let unwritable = matches!(
            source.kind(),
            io::ErrorKind::PermissionDenied | io::ErrorKind::NotFound
        ) || matches!(destination, Destination::File(path) if path.is_dir());

        if unwritable {
            Self::Unwritable {
                destination: destination.clone(),
                source,
            }
        } else {
            Self::Io {
                destination: destination.clone(),
                source,
            }
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(ValidationError::NotAnInteger(_)) => 2,
            Self::Validation(ValidationError::SegmentCount { .. }) => 3,
            Self::Validation(ValidationError::OverlapBounds { .. }) => 4,
            Self::Unwritable { .. } => 5,
            Self::Allocation { .. } | Self::Io { .. } => 6,
        }
    }
}
