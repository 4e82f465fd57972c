//! Decoded values and entries

use crate::format::Field;
use num_complex::Complex;

/// Double precision complex number
pub type Complex64 = Complex<f64>;

/// A single decoded value, tagged by field kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Real(f64),
    Integer(i64),
    Complex(Complex64),
    /// Presence only; the implied value is one
    Pattern,
}

impl Value {
    /// Field kind this value was decoded from
    pub const fn field(&self) -> Field {
        match self {
            Value::Real(_) => Field::Real,
            Value::Integer(_) => Field::Integer,
            Value::Complex(_) => Field::Complex,
            Value::Pattern => Field::Pattern,
        }
    }

    /// Additive inverse, used for skew-symmetric mirrors
    pub fn negate(self) -> Self {
        match self {
            Value::Real(v) => Value::Real(-v),
            Value::Integer(v) => Value::Integer(v.wrapping_neg()),
            Value::Complex(v) => Value::Complex(-v),
            Value::Pattern => Value::Pattern,
        }
    }

    /// Complex conjugate, used for Hermitian mirrors
    pub fn conj(self) -> Self {
        match self {
            Value::Complex(v) => Value::Complex(v.conj()),
            other => other,
        }
    }

    /// Real part widened to f64 (pattern is one)
    pub fn re(&self) -> f64 {
        match *self {
            Value::Real(v) => v,
            Value::Integer(v) => v as f64,
            Value::Complex(v) => v.re,
            Value::Pattern => 1.0,
        }
    }

    /// Imaginary part (zero for every non-complex field)
    pub fn im(&self) -> f64 {
        match *self {
            Value::Complex(v) => v.im,
            _ => 0.0,
        }
    }
}

/// A decoded `(row, col, value)` triple in 0-based coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: Value,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: Value) -> Self {
        Self { row, col, value }
    }

    /// Whether the entry lies on the main diagonal
    pub const fn is_diagonal(&self) -> bool {
        self.row == self.col
    }
}
