//! Capabilities the codec needs from matrix storage
//!
//! The codec never owns matrix storage. Decoding writes into a [`MatrixSink`]
//! and encoding reads from a [`MatrixSource`].

use super::element::MarketElement;
use crate::format::{Field, Format, Shape, TypeDescriptor};
use crate::Result;

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// Storage a decoded matrix is written into
pub trait MatrixSink {
    /// The element type stored in this matrix
    type Element: MarketElement;

    /// Prepare storage once the header and shape are known
    ///
    /// Called before any element is set. Implementations may reject the
    /// descriptor, which aborts the decode.
    fn reserve(&mut self, descriptor: &TypeDescriptor, shape: &Shape) -> Result<()>;

    /// Set the element at a 0-based position
    ///
    /// Positions are always inside the reserved shape. A later call for the
    /// same position overwrites the earlier one.
    fn set_element(&mut self, row: usize, col: usize, value: Self::Element);
}

/// Storage a matrix is encoded from (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixSource {
    /// The element type stored in this matrix
    type Element: MarketElement;

    /// Layout the matrix is written in
    fn format(&self) -> Format;

    /// Field the matrix is written as
    fn field(&self) -> Field {
        <Self::Element as MarketElement>::FIELD
    }

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of explicitly stored entries
    fn nnz(&self) -> usize;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is not stored or if the position is out
    /// of bounds. Array encoding treats `None` as zero.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Stored entries as 0-based `(row, col, value)` in natural order
    fn entries(&self) -> Box<dyn Iterator<Item = (usize, usize, Self::Element)> + '_>;
}
