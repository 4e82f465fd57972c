//! Storage chosen from a file's banner

use crate::writer::encode;
use crate::{CooMatrix, DenseMatrix, MarketConfig, Result};
use mtx_core::{Complex64, Field, Format, MarketElement, MatrixSource, TypeDescriptor, Value};
use std::io::Write;

/// Matrix whose storage and element type follow the decoded header
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicMatrix {
    DenseReal(DenseMatrix<f64>),
    DenseInteger(DenseMatrix<i64>),
    DenseComplex(DenseMatrix<Complex64>),
    CooReal(CooMatrix<f64>),
    CooInteger(CooMatrix<i64>),
    CooComplex(CooMatrix<Complex64>),
    /// Positions only, each stored as one
    CooPattern(CooMatrix<f64>),
}

impl DynamicMatrix {
    /// Empty storage for a descriptor, `None` for array pattern files
    pub fn for_descriptor(descriptor: &TypeDescriptor) -> Option<Self> {
        let matrix = match (descriptor.format, descriptor.field) {
            (Format::Array, Field::Real) => DynamicMatrix::DenseReal(DenseMatrix::default()),
            (Format::Array, Field::Integer) => DynamicMatrix::DenseInteger(DenseMatrix::default()),
            (Format::Array, Field::Complex) => DynamicMatrix::DenseComplex(DenseMatrix::default()),
            (Format::Array, Field::Pattern) => return None,
            (Format::Coordinate, Field::Real) => DynamicMatrix::CooReal(CooMatrix::default()),
            (Format::Coordinate, Field::Integer) => DynamicMatrix::CooInteger(CooMatrix::default()),
            (Format::Coordinate, Field::Complex) => DynamicMatrix::CooComplex(CooMatrix::default()),
            (Format::Coordinate, Field::Pattern) => DynamicMatrix::CooPattern(CooMatrix::pattern(0, 0)),
        };
        Some(matrix)
    }

    /// Layout the matrix is written in
    pub fn format(&self) -> Format {
        match self {
            DynamicMatrix::DenseReal(_)
            | DynamicMatrix::DenseInteger(_)
            | DynamicMatrix::DenseComplex(_) => Format::Array,
            _ => Format::Coordinate,
        }
    }

    /// Field the matrix is written as
    pub fn field(&self) -> Field {
        match self {
            DynamicMatrix::DenseReal(m) => m.field(),
            DynamicMatrix::DenseInteger(m) => m.field(),
            DynamicMatrix::DenseComplex(m) => m.field(),
            DynamicMatrix::CooReal(m) => m.field(),
            DynamicMatrix::CooInteger(m) => m.field(),
            DynamicMatrix::CooComplex(m) => m.field(),
            DynamicMatrix::CooPattern(m) => m.field(),
        }
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            DynamicMatrix::DenseReal(m) => m.dimensions(),
            DynamicMatrix::DenseInteger(m) => m.dimensions(),
            DynamicMatrix::DenseComplex(m) => m.dimensions(),
            DynamicMatrix::CooReal(m) => m.dimensions(),
            DynamicMatrix::CooInteger(m) => m.dimensions(),
            DynamicMatrix::CooComplex(m) => m.dimensions(),
            DynamicMatrix::CooPattern(m) => m.dimensions(),
        }
    }

    /// Number of explicitly stored entries
    pub fn nnz(&self) -> usize {
        match self {
            DynamicMatrix::DenseReal(m) => m.nnz(),
            DynamicMatrix::DenseInteger(m) => m.nnz(),
            DynamicMatrix::DenseComplex(m) => m.nnz(),
            DynamicMatrix::CooReal(m) => m.nnz(),
            DynamicMatrix::CooInteger(m) => m.nnz(),
            DynamicMatrix::CooComplex(m) => m.nnz(),
            DynamicMatrix::CooPattern(m) => m.nnz(),
        }
    }

    /// Stored value at a 0-based position
    pub fn get_element(&self, row: usize, col: usize) -> Option<Value> {
        match self {
            DynamicMatrix::DenseReal(m) => m.get(row, col).map(MarketElement::to_value),
            DynamicMatrix::DenseInteger(m) => m.get(row, col).map(MarketElement::to_value),
            DynamicMatrix::DenseComplex(m) => m.get(row, col).map(MarketElement::to_value),
            DynamicMatrix::CooReal(m) => m.get(row, col).map(MarketElement::to_value),
            DynamicMatrix::CooInteger(m) => m.get(row, col).map(MarketElement::to_value),
            DynamicMatrix::CooComplex(m) => m.get(row, col).map(MarketElement::to_value),
            DynamicMatrix::CooPattern(m) => m.get(row, col).map(|_| Value::Pattern),
        }
    }

    /// Encode into `writer`, returning bytes written
    pub fn write_to<W: Write>(&self, writer: W, config: &MarketConfig) -> Result<u64> {
        match self {
            DynamicMatrix::DenseReal(m) => encode(writer, m, config),
            DynamicMatrix::DenseInteger(m) => encode(writer, m, config),
            DynamicMatrix::DenseComplex(m) => encode(writer, m, config),
            DynamicMatrix::CooReal(m) => encode(writer, m, config),
            DynamicMatrix::CooInteger(m) => encode(writer, m, config),
            DynamicMatrix::CooComplex(m) => encode(writer, m, config),
            DynamicMatrix::CooPattern(m) => encode(writer, m, config),
        }
    }
}
