//! Fixture writing.
//!
//! A fixture is the segment count, one strand per line, then the original
//! string. Paths ending in `.gz` are gzip-compressed; `-` writes to stdout.

use std::fs::File;
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::core::types::Strand;

/// Where the fixture goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `-` means stdout, anything else is a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Open the destination for writing, truncating an existing file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be created.
    pub fn open(&self) -> io::Result<FixtureSink> {
        match self {
            Self::Stdout => Ok(FixtureSink::Stdout(BufWriter::new(io::stdout().lock()))),
            Self::File(path) => {
                let file = BufWriter::new(File::create(path)?);
                if is_gzipped(path) {
                    Ok(FixtureSink::Gzip(GzEncoder::new(file, Compression::default())))
                } else {
                    Ok(FixtureSink::File(file))
                }
            }
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".gz")
}

/// An open destination. Call [`FixtureSink::finish`] to flush everything,
/// including the gzip trailer.
pub enum FixtureSink {
    Stdout(BufWriter<StdoutLock<'static>>),
    File(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl FixtureSink {
    /// Flush buffered output and close the stream.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while flushing.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Stdout(mut w) => w.flush(),
            Self::File(mut w) => w.flush(),
            Self::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for FixtureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::File(w) => w.write(buf),
            Self::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
            Self::Gzip(w) => w.flush(),
        }
    }
}

/// Write a fixture: `count`, then every strand in the given order, then `original`.
///
/// # Errors
///
/// Returns any I/O error raised by the writer.
pub fn write_fixture<'a, W, I>(
    writer: &mut W,
    count: usize,
    strands: I,
    original: &str,
) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Strand>,
{
    writeln!(writer, "{count}")?;
    for strand in strands {
        writeln!(writer, "{}", strand.sequence)?;
    }
    writeln!(writer, "{original}")
}
