//! Per-line element decoding
//!
//! Each supported (format, field) pair has one decoding routine. The routine is
//! picked once from the supported type table and then applied to every data
//! line of the file.

use crate::format::{Field, Format};
use crate::validation::parsing::{self, take_exact};
use crate::value::{Complex64, Value};
use crate::Result;

/// Decoding routine for one data line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStrategy {
    /// `<value>`
    ArrayReal,
    /// `<value>`
    ArrayInteger,
    /// `<real> <imag>`
    ArrayComplex,
    /// `<row> <col> <value>`
    CoordinateReal,
    /// `<row> <col> <value>`
    CoordinateInteger,
    /// `<row> <col> <real> <imag>`
    CoordinateComplex,
    /// `<row> <col>`
    CoordinatePattern,
}

/// Result of decoding one data line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedLine {
    /// 0-based `(row, col)` for coordinate lines, `None` for array lines
    pub coordinate: Option<(usize, usize)>,
    pub value: Value,
}

impl DecodeStrategy {
    /// Strategy for a (format, field) pair, `None` for array+pattern
    pub const fn select(format: Format, field: Field) -> Option<Self> {
        match (format, field) {
            (Format::Array, Field::Real) => Some(DecodeStrategy::ArrayReal),
            (Format::Array, Field::Integer) => Some(DecodeStrategy::ArrayInteger),
            (Format::Array, Field::Complex) => Some(DecodeStrategy::ArrayComplex),
            (Format::Array, Field::Pattern) => None,
            (Format::Coordinate, Field::Real) => Some(DecodeStrategy::CoordinateReal),
            (Format::Coordinate, Field::Integer) => Some(DecodeStrategy::CoordinateInteger),
            (Format::Coordinate, Field::Complex) => Some(DecodeStrategy::CoordinateComplex),
            (Format::Coordinate, Field::Pattern) => Some(DecodeStrategy::CoordinatePattern),
        }
    }

    pub const fn format(self) -> Format {
        match self {
            DecodeStrategy::ArrayReal
            | DecodeStrategy::ArrayInteger
            | DecodeStrategy::ArrayComplex => Format::Array,
            _ => Format::Coordinate,
        }
    }

    pub const fn field(self) -> Field {
        match self {
            DecodeStrategy::ArrayReal | DecodeStrategy::CoordinateReal => Field::Real,
            DecodeStrategy::ArrayInteger | DecodeStrategy::CoordinateInteger => Field::Integer,
            DecodeStrategy::ArrayComplex | DecodeStrategy::CoordinateComplex => Field::Complex,
            DecodeStrategy::CoordinatePattern => Field::Pattern,
        }
    }

    /// Decode a single non-blank data line
    pub fn decode(self, line: &str) -> Result<DecodedLine> {
        let tokens = line.split_whitespace();

        let decoded = match self {
            DecodeStrategy::ArrayReal => {
                let [v] = take_exact::<1>(tokens)?;
                DecodedLine::array(Value::Real(parsing::parse_real(v)?))
            }
            DecodeStrategy::ArrayInteger => {
                let [v] = take_exact::<1>(tokens)?;
                DecodedLine::array(Value::Integer(parsing::parse_integer(v)?))
            }
            DecodeStrategy::ArrayComplex => {
                let [re, im] = take_exact::<2>(tokens)?;
                DecodedLine::array(complex(re, im)?)
            }
            DecodeStrategy::CoordinateReal => {
                let [i, j, v] = take_exact::<3>(tokens)?;
                DecodedLine::at(i, j, Value::Real(parsing::parse_real(v)?))?
            }
            DecodeStrategy::CoordinateInteger => {
                let [i, j, v] = take_exact::<3>(tokens)?;
                DecodedLine::at(i, j, Value::Integer(parsing::parse_integer(v)?))?
            }
            DecodeStrategy::CoordinateComplex => {
                let [i, j, re, im] = take_exact::<4>(tokens)?;
                DecodedLine::at(i, j, complex(re, im)?)?
            }
            DecodeStrategy::CoordinatePattern => {
                let [i, j] = take_exact::<2>(tokens)?;
                DecodedLine::at(i, j, Value::Pattern)?
            }
        };

        Ok(decoded)
    }
}

impl DecodedLine {
    const fn array(value: Value) -> Self {
        Self {
            coordinate: None,
            value,
        }
    }

    fn at(row: &str, col: &str, value: Value) -> Result<Self> {
        Ok(Self {
            coordinate: Some((
                parsing::parse_coordinate(row)?,
                parsing::parse_coordinate(col)?,
            )),
            value,
        })
    }
}

fn complex(re: &str, im: &str) -> Result<Value> {
    Ok(Value::Complex(Complex64::new(
        parsing::parse_real(re)?,
        parsing::parse_real(im)?,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_select_round_trips_format_and_field() {
        for format in [Format::Array, Format::Coordinate] {
            for field in [Field::Real, Field::Integer, Field::Complex, Field::Pattern] {
                if let Some(s) = DecodeStrategy::select(format, field) {
                    assert_eq!(s.format(), format);
                    assert_eq!(s.field(), field);
                }
            }
        }
        assert_eq!(DecodeStrategy::select(Format::Array, Field::Pattern), None);
    }

    #[test]
    fn test_decode_array_lines() {
        let d = DecodeStrategy::ArrayReal.decode("  -0.5 ").unwrap();
        assert_eq!(d.coordinate, None);
        assert_eq!(d.value, Value::Real(-0.5));

        let d = DecodeStrategy::ArrayInteger.decode("42").unwrap();
        assert_eq!(d.value, Value::Integer(42));

        let d = DecodeStrategy::ArrayComplex.decode(" 0.5 -0.1").unwrap();
        assert_eq!(d.value, Value::Complex(Complex64::new(0.5, -0.1)));
    }

    #[test]
    fn test_decode_coordinate_lines() {
        let d = DecodeStrategy::CoordinateReal.decode("1 3 2.5").unwrap();
        assert_eq!(d.coordinate, Some((0, 2)));
        assert_eq!(d.value, Value::Real(2.5));

        let d = DecodeStrategy::CoordinateComplex.decode("2 1 1 -1").unwrap();
        assert_eq!(d.coordinate, Some((1, 0)));
        assert_eq!(d.value, Value::Complex(Complex64::new(1.0, -1.0)));

        let d = DecodeStrategy::CoordinatePattern.decode("5 4").unwrap();
        assert_eq!(d.coordinate, Some((4, 3)));
        assert_eq!(d.value, Value::Pattern);
    }

    #[test]
    fn test_decode_malformed_lines() {
        let bad = [
            (DecodeStrategy::ArrayReal, "abc"),
            (DecodeStrategy::ArrayReal, "1 2"),
            (DecodeStrategy::ArrayInteger, "1.5"),
            (DecodeStrategy::ArrayComplex, "1"),
            (DecodeStrategy::CoordinateReal, "1 2"),
            (DecodeStrategy::CoordinateReal, "0 1 1.0"),
            (DecodeStrategy::CoordinateInteger, "1 1 x"),
            (DecodeStrategy::CoordinateComplex, "1 1 1.0"),
            (DecodeStrategy::CoordinatePattern, "1 1 1"),
            (DecodeStrategy::CoordinatePattern, "% comment"),
        ];
        for (strategy, line) in bad {
            assert_eq!(
                strategy.decode(line),
                Err(ErrorKind::InputScanError),
                "{strategy:?} accepted {line:?}"
            );
        }
    }
}
