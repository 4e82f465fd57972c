//! Table of supported Matrix Market type combinations
//!
//! The legal set is defined by the exchange format itself and is not a simple
//! product of the four header fields (array+pattern and real+hermitian are both
//! rejected, for example), so validity is decided by lookup in this table.

use super::header::{Field, Format, Symmetry, TypeDescriptor};
use crate::element::DecodeStrategy;

/// One row of the supported type table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredType {
    pub descriptor: TypeDescriptor,
    pub strategy: DecodeStrategy,
}

const fn entry(format: Format, field: Field, symmetry: Symmetry) -> RegisteredType {
    RegisteredType {
        descriptor: TypeDescriptor::new(format, field, symmetry),
        strategy: match DecodeStrategy::select(format, field) {
            Some(strategy) => strategy,
            None => panic!("no decode strategy for registered type"),
        },
    }
}

use super::header::Field::{Complex, Integer, Pattern, Real};
use super::header::Format::{Array, Coordinate};
use super::header::Symmetry::{General, Hermitian, SkewSymmetric, Symmetric};

/// Every supported combination, in canonical order
pub const SUPPORTED: [RegisteredType; 22] = [
    entry(Coordinate, Real, General),
    entry(Coordinate, Real, Symmetric),
    entry(Coordinate, Real, SkewSymmetric),
    entry(Coordinate, Integer, General),
    entry(Coordinate, Integer, Symmetric),
    entry(Coordinate, Integer, SkewSymmetric),
    entry(Coordinate, Complex, General),
    entry(Coordinate, Complex, Symmetric),
    entry(Coordinate, Complex, SkewSymmetric),
    entry(Array, Real, General),
    entry(Array, Real, Symmetric),
    entry(Array, Real, SkewSymmetric),
    entry(Array, Integer, General),
    entry(Array, Integer, Symmetric),
    entry(Array, Integer, SkewSymmetric),
    entry(Array, Complex, General),
    entry(Array, Complex, Symmetric),
    entry(Array, Complex, SkewSymmetric),
    entry(Coordinate, Complex, Hermitian),
    entry(Array, Complex, Hermitian),
    entry(Coordinate, Pattern, General),
    entry(Coordinate, Pattern, Symmetric),
];

/// Find the table index of a descriptor
pub fn lookup(descriptor: &TypeDescriptor) -> Option<usize> {
    SUPPORTED
        .iter()
        .position(|registered| registered.descriptor == *descriptor)
}

/// Get the table row at `index`
pub fn get(index: usize) -> Option<&'static RegisteredType> {
    SUPPORTED.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_no_duplicates() {
        for (i, a) in SUPPORTED.iter().enumerate() {
            assert_eq!(lookup(&a.descriptor), Some(i));
        }
    }

    #[test]
    fn test_lookup_rejects_illegal_combinations() {
        let illegal = [
            TypeDescriptor::new(Array, Pattern, General),
            TypeDescriptor::new(Coordinate, Real, Hermitian),
            TypeDescriptor::new(Coordinate, Integer, Hermitian),
            TypeDescriptor::new(Coordinate, Pattern, SkewSymmetric),
            TypeDescriptor::new(Coordinate, Pattern, Hermitian),
            TypeDescriptor::new(Array, Pattern, Symmetric),
        ];
        for t in illegal {
            assert_eq!(lookup(&t), None, "{t} should be rejected");
        }
    }

    #[test]
    fn test_strategy_follows_format_and_field() {
        let row = get(lookup(&TypeDescriptor::new(Array, Complex, Hermitian)).unwrap()).unwrap();
        assert_eq!(row.strategy, DecodeStrategy::ArrayComplex);

        let row = get(lookup(&TypeDescriptor::new(Coordinate, Pattern, Symmetric)).unwrap()).unwrap();
        assert_eq!(row.strategy, DecodeStrategy::CoordinatePattern);

        assert!(get(SUPPORTED.len()).is_none());
    }
}
