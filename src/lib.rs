//! # string-blaster
//!
//! Generate test fixtures for "all pairs suffix-prefix" overlap solvers.
//!
//! A random string over `{A,T,C,G}` is cut into `k` segments. Every segment but
//! the first borrows the tail of its left neighbour, the first always borrows
//! the head of its right neighbour, and interior segments borrow the head of
//! their right neighbour on a coin flip. The resulting strands are written in
//! random order, followed by the original string so a solver's output can be
//! checked against ground truth.
//!
//! Runs are reproducible: one `ChaCha8Rng` seeded with a fixed value (41 by
//! default) drives the whole pipeline.
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use string_blaster::blast::{blast_string, output::write_fixture};
//! use string_blaster::parsing::fixture::parse_fixture_text;
//! use string_blaster::utils::validation::validate_params;
//!
//! let params = validate_params(1000, 10, Some(1), Some(40), 41).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
//! let blasted = blast_string(&params, &mut rng).unwrap();
//!
//! let mut out = Vec::new();
//! write_fixture(&mut out, params.segments, blasted.shuffled(&mut rng), &blasted.original).unwrap();
//!
//! let fixture = parse_fixture_text(std::str::from_utf8(&out).unwrap()).unwrap();
//! assert_eq!(fixture.segment_count(), 10);
//! assert_eq!(fixture.original, blasted.original);
//! ```
//!
//! ## Modules
//!
//! - [`blast`]: Partitioning, overlap construction, and fixture output
//! - [`core`]: Alphabet, parameters, strands, and random string generation
//! - [`parsing`]: Reading fixtures back
//! - [`utils`]: Parameter validation
//! - [`cli`]: Command-line interface implementation

pub mod blast;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use blast::{blast_string, BlastedString};
pub use crate::core::types::{BlastParams, Nucleotide, Strand};
pub use parsing::fixture::Fixture;
