//! Parsers for reading generated fixtures back.
//!
//! ## Example
//!
//! ```rust
//! use string_blaster::parsing::fixture::parse_fixture_text;
//!
//! let fixture = parse_fixture_text("1\nACGT\nACGT\n").unwrap();
//! assert_eq!(fixture.segment_count(), 1);
//! assert!(fixture.reconstructs_original());
//! ```

pub mod fixture;
