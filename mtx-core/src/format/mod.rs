//! Text format definitions for the Matrix Market exchange format
//!
//! This module contains the banner grammar, the supported type table and the
//! dimension line. No I/O happens here.

pub mod constants;
pub mod header;
pub mod registry;
pub mod shape;

pub use header::{Field, Format, Object, Symmetry, TypeDescriptor};
pub use registry::{RegisteredType, SUPPORTED};
pub use shape::Shape;
