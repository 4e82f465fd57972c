//! Abstract interfaces between the codec and matrix storage

pub mod element;
pub mod matrix;

pub use element::MarketElement;
pub use matrix::MatrixSink;
#[cfg(feature = "alloc")]
pub use matrix::MatrixSource;
