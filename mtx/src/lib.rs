//! MTX - Matrix Market exchange format reader and writer
//!
//! This library reads and writes the Matrix Market text format for dense
//! (array) and sparse (coordinate) matrices with real, integer, complex or
//! pattern values, including symmetric, skew-symmetric and Hermitian files.
//!
//! ## Architecture
//!
//! - **mtx-core**: banner grammar, type table, line decoding, symmetry
//!   expansion and column alignment (no I/O)
//! - **mtx**: the decode driver and serializer over `std::io`, configuration,
//!   error reporting and two storage adapters
//!
//! ## Quick Start
//!
//! ```rust
//! use mtx::{CooMatrix, MatrixMarket, MarketConfig};
//!
//! fn example() -> mtx::Result<()> {
//!     let text = "%%MatrixMarket matrix coordinate real symmetric\n\
//!                 3 3 2\n\
//!                 1 1 4.0\n\
//!                 3 1 -1.5\n";
//!
//!     let market = MatrixMarket::new(MarketConfig::default());
//!     let matrix: CooMatrix<f64> = market.read_bytes(text.as_bytes())?;
//!     assert_eq!(matrix.get(0, 2), Some(-1.5));
//!
//!     let out = market.write_string(&matrix)?;
//!     assert!(out.starts_with("%%MatrixMarket matrix coordinate real general"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub use mtx_core::{
    // Core traits
    MarketElement, MatrixSink, MatrixSource,
    // Format definitions
    Field, Format, Object, Shape, Symmetry, TypeDescriptor,
    // Values
    Complex, Complex64, Entry, Value,
    // Error categories
    ErrorKind,
};

/// Banner grammar, supported type table and shape line
pub use mtx_core::format;

pub mod config;
pub mod coo;
pub mod dense;
pub mod dynamic;
pub mod error;
pub mod io;
pub mod reader;
pub mod writer;

pub use config::MarketConfig;
pub use coo::CooMatrix;
pub use dense::DenseMatrix;
pub use dynamic::DynamicMatrix;
pub use error::{Error, Result};

/// Reader and writer bound to one configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixMarket {
    config: MarketConfig,
}

impl MatrixMarket {
    pub fn new(config: MarketConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Decode from `reader` into `sink`, returning bytes consumed
    pub fn read<R, S>(&self, reader: R, sink: &mut S) -> Result<u64>
    where
        R: std::io::Read,
        S: MatrixSink + ?Sized,
    {
        reader::decode(std::io::BufReader::new(reader), sink, &self.config)
    }

    /// Decode from `reader` into storage chosen from the banner
    pub fn read_dynamic<R: std::io::Read>(&self, reader: R) -> Result<DynamicMatrix> {
        let (matrix, _) = reader::decode_dynamic(std::io::BufReader::new(reader), &self.config)?;
        Ok(matrix)
    }

    /// Encode `matrix` into `writer`, returning bytes written
    pub fn write<W, M>(&self, writer: W, matrix: &M) -> Result<u64>
    where
        W: std::io::Write,
        M: MatrixSource + ?Sized,
    {
        writer::encode(writer, matrix, &self.config)
    }

    /// Decode an in-memory buffer into a fresh sink
    pub fn read_bytes<S: MatrixSink + Default>(&self, bytes: &[u8]) -> Result<S> {
        let mut sink = S::default();
        reader::decode(bytes, &mut sink, &self.config)?;
        Ok(sink)
    }

    /// Encode `matrix` into a string
    pub fn write_string<M: MatrixSource + ?Sized>(&self, matrix: &M) -> Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, matrix)?;
        String::from_utf8(buf).map_err(|_| Error::from(ErrorKind::Unwritable))
    }
}

/// Decode with the default configuration
pub fn read_matrix<R, S>(reader: R, sink: &mut S) -> Result<u64>
where
    R: std::io::Read,
    S: MatrixSink + ?Sized,
{
    MatrixMarket::default().read(reader, sink)
}

/// Decode into storage chosen from the banner with the default configuration
pub fn read_dynamic<R: std::io::Read>(reader: R) -> Result<DynamicMatrix> {
    MatrixMarket::default().read_dynamic(reader)
}

/// Encode with the default configuration
pub fn write_matrix<W, M>(writer: W, matrix: &M) -> Result<u64>
where
    W: std::io::Write,
    M: MatrixSource + ?Sized,
{
    MatrixMarket::default().write(writer, matrix)
}

/// Decode an in-memory buffer with the default configuration
pub fn from_bytes<S: MatrixSink + Default>(bytes: &[u8]) -> Result<S> {
    MatrixMarket::default().read_bytes(bytes)
}

/// Encode to a string with the default configuration
pub fn to_string<M: MatrixSource + ?Sized>(matrix: &M) -> Result<String> {
    MatrixMarket::default().write_string(matrix)
}
