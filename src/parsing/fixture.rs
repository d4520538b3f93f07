//! Reader for fixture files.
//!
//! Format: the strand count on the first line, that many strand lines, then the
//! original string. Files ending in `.gz` are decompressed transparently.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

use crate::core::types::Nucleotide;
use crate::utils::validation::MAX_PREALLOCATED_STRANDS;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fixture format: {0}")]
    InvalidFormat(String),

    #[error("Invalid strand count '{0}'")]
    InvalidCount(String),

    #[error("Invalid base '{base}' on line {line}")]
    InvalidBase { line: usize, base: char },
}

/// A parsed fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Strands in file order
    pub strands: Vec<String>,

    /// The string the strands were cut from
    pub original: String,
}

impl Fixture {
    /// Number of strands, which is also the segment count on the header line
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.strands.len()
    }

    /// Sanity check on the fixture itself: every strand is a piece of the
    /// original and together the strands are long enough to cover it.
    #[must_use]
    pub fn reconstructs_original(&self) -> bool {
        let total: usize = self.strands.iter().map(String::len).sum();
        total >= self.original.len()
            && self
                .strands
                .iter()
                .all(|strand| self.original.contains(strand.as_str()))
    }
}

#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".gz")
}

/// Parse a fixture file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any format error
/// from [`parse_fixture_reader`].
pub fn parse_fixture_file(path: &Path) -> Result<Fixture, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        parse_fixture_reader(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_fixture_reader(BufReader::new(file))
    }
}

/// Parse a fixture from text
///
/// # Errors
///
/// Same as [`parse_fixture_reader`].
pub fn parse_fixture_text(text: &str) -> Result<Fixture, ParseError> {
    parse_fixture_reader(text.as_bytes())
}

/// Parse a fixture from any buffered reader
///
/// # Errors
///
/// Returns `ParseError::InvalidCount` if the header is not a non-negative
/// integer or leaves no room for the original string,
/// `ParseError::InvalidFormat` if the number of lines does not match it, or `ParseError::InvalidBase` for characters outside `ATCG`.
pub fn parse_fixture_reader<R: BufRead>(reader: R) -> Result<Fixture, ParseError> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("empty fixture".to_string()))??;
    let count: usize = header
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidCount(header.trim().to_string()))?;

    // Strands plus the original
    let expected = count
        .checked_add(1)
        .ok_or_else(|| ParseError::InvalidCount(header.trim().to_string()))?;

    // The header is not trusted to size the buffer
    let mut body = Vec::with_capacity(expected.min(MAX_PREALLOCATED_STRANDS));
    for (i, line) in lines.enumerate() {
        let line = line?;
        check_bases(&line, i + 2)?;
        body.push(line);
    }

    // Tolerate a single trailing blank line
    if body.last().is_some_and(String::is_empty) && body.len().checked_sub(1) == Some(expected) {
        body.pop();
    }

    if body.len() != expected {
        return Err(ParseError::InvalidFormat(format!(
            "expected {count} strands and an original string, found {} lines after the header",
            body.len()
        )));
    }

    let original = body.pop().unwrap_or_default();
    Ok(Fixture {
        strands: body,
        original,
    })
}

fn check_bases(line: &str, line_number: usize) -> Result<(), ParseError> {
    match line.bytes().find(|&b| Nucleotide::from_byte(b).is_none()) {
        Some(b) => Err(ParseError::InvalidBase {
            line: line_number,
            base: char::from(b),
        }),
        None => Ok(()),
    }
}
