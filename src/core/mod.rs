//! Core data types for fixture generation.
//!
//! - [`Nucleotide`]: the four-letter alphabet the original string is drawn from
//! - [`BlastParams`]: validated generation parameters
//! - [`Strand`]: a segment plus the overlap fragments copied from its neighbours
//!
//! [`Nucleotide`]: types::Nucleotide
//! [`BlastParams`]: types::BlastParams
//! [`Strand`]: types::Strand

pub mod sequence;
pub mod types;
