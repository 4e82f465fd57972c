#![no_std]

//! MTX Core - Matrix Market exchange format definitions
//!
//! This crate provides the banner grammar, the supported type table, per-line
//! element decoding, symmetry expansion and column alignment for the Matrix
//! Market text format, plus the traits matrix storage implements to be read
//! or written. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "alloc")]
pub mod align;
pub mod element;
pub mod error;
pub mod format;
pub mod symmetry;
pub mod traits;
pub mod validation;
pub mod value;

#[cfg(feature = "alloc")]
pub use align::{FloatStyle, LineAligner};
pub use element::{DecodeStrategy, DecodedLine};
pub use error::*;
pub use format::*;
pub use symmetry::{mirror, ArrayCursor, Expansion, SymmetryExpander};
pub use traits::*;
pub use value::{Complex64, Entry, Value};

pub use num_complex::Complex;
