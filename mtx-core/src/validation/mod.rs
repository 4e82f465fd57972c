//! Validation utilities for Matrix Market text
//!
//! Pure functions with no I/O: token parsing and index bounds checks.

pub mod bounds;
pub mod parsing;

pub use bounds::{cell_count, validate_coordinate};
pub use parsing::{is_blank, is_comment};
