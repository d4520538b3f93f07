//! Centralized validation helpers.

pub mod validation;
