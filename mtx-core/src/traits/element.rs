//! Element types a Matrix Market matrix can hold
//!
//! Each storage element type names the field it is written as and the
//! decoded fields it can be populated from.

use crate::format::Field;
use crate::value::{Complex64, Value};
use crate::{ErrorKind, Result};
use num_complex::Complex;

/// Trait for types that can be stored as Matrix Market values
///
/// Conversions go through [`Value`], the tagged representation produced by
/// the element decoder.
pub trait MarketElement: Copy + PartialEq + Sized {
    /// Field this type is written as
    const FIELD: Field;

    /// Whether floats are held in single precision
    const SINGLE_PRECISION: bool = false;

    /// Whether a file with the given field can populate this type
    fn accepts(field: Field) -> bool;

    /// Convert a decoded value
    ///
    /// Fails with `InputScanError` when the value does not fit this type and
    /// with `UnsupportedType` for a field [`MarketElement::accepts`] rejects.
    fn from_value(value: Value) -> Result<Self>;

    /// Convert to the tagged value form used by the serializer
    fn to_value(self) -> Value;

    /// Default value of an unset cell
    fn zero() -> Self;

    /// Whether the value equals the default of an unset cell
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Narrow to f32, rejecting finite values outside its range
fn narrow(v: f64) -> Result<f32> {
    let n = v as f32;
    if n.is_infinite() && v.is_finite() {
        return Err(ErrorKind::InputScanError);
    }
    Ok(n)
}

impl MarketElement for f64 {
    const FIELD: Field = Field::Real;

    fn accepts(field: Field) -> bool {
        !matches!(field, Field::Complex)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Complex(_) => Err(ErrorKind::UnsupportedType),
            other => Ok(other.re()),
        }
    }

    fn to_value(self) -> Value {
        Value::Real(self)
    }

    fn zero() -> Self {
        0.0
    }
}

impl MarketElement for f32 {
    const FIELD: Field = Field::Real;
    const SINGLE_PRECISION: bool = true;

    fn accepts(field: Field) -> bool {
        !matches!(field, Field::Complex)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Complex(_) => Err(ErrorKind::UnsupportedType),
            other => narrow(other.re()),
        }
    }

    fn to_value(self) -> Value {
        Value::Real(f64::from(self))
    }

    fn zero() -> Self {
        0.0
    }
}

macro_rules! impl_integer_element {
    ($($ty:ty),*) => {
        $(
            impl MarketElement for $ty {
                const FIELD: Field = Field::Integer;

                fn accepts(field: Field) -> bool {
                    matches!(field, Field::Integer | Field::Pattern)
                }

                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::Integer(v) => {
                            <$ty>::try_from(v).map_err(|_| ErrorKind::InputScanError)
                        }
                        Value::Pattern => Ok(1),
                        _ => Err(ErrorKind::UnsupportedType),
                    }
                }

                fn to_value(self) -> Value {
                    Value::Integer(i64::from(self))
                }

                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

impl_integer_element!(i64, i32);

impl MarketElement for Complex64 {
    const FIELD: Field = Field::Complex;

    fn accepts(_field: Field) -> bool {
        true
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(Complex::new(value.re(), value.im()))
    }

    fn to_value(self) -> Value {
        Value::Complex(self)
    }

    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }
}

impl MarketElement for Complex<f32> {
    const FIELD: Field = Field::Complex;
    const SINGLE_PRECISION: bool = true;

    fn accepts(_field: Field) -> bool {
        true
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(Complex::new(narrow(value.re())?, narrow(value.im())?))
    }

    fn to_value(self) -> Value {
        Value::Complex(Complex::new(f64::from(self.re), f64::from(self.im)))
    }

    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_acceptance() {
        assert!(f64::accepts(Field::Real));
        assert!(f64::accepts(Field::Integer));
        assert!(f64::accepts(Field::Pattern));
        assert!(!f64::accepts(Field::Complex));

        assert!(i32::accepts(Field::Integer));
        assert!(i32::accepts(Field::Pattern));
        assert!(!i32::accepts(Field::Real));

        for field in [Field::Real, Field::Integer, Field::Complex, Field::Pattern] {
            assert!(Complex64::accepts(field));
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(f64::from_value(Value::Integer(3)), Ok(3.0));
        assert_eq!(f32::from_value(Value::Pattern), Ok(1.0));
        assert_eq!(i64::from_value(Value::Integer(-9)), Ok(-9));
        assert_eq!(i32::from_value(Value::Pattern), Ok(1));
        assert_eq!(
            Complex64::from_value(Value::Real(2.5)),
            Ok(Complex64::new(2.5, 0.0))
        );
        assert_eq!(
            Complex::<f32>::from_value(Value::Complex(Complex64::new(1.0, -2.0))),
            Ok(Complex::new(1.0f32, -2.0))
        );

        assert_eq!(7i32.to_value(), Value::Integer(7));
        assert_eq!(0.5f32.to_value(), Value::Real(0.5));
        assert!(Complex64::zero().is_zero());
        assert!(!1.0f64.is_zero());
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        assert_eq!(
            i32::from_value(Value::Integer(5_000_000_000)),
            Err(ErrorKind::InputScanError)
        );
        assert_eq!(
            i32::from_value(Value::Integer(i64::from(i32::MIN))),
            Ok(i32::MIN)
        );
        assert_eq!(
            f32::from_value(Value::Real(1e300)),
            Err(ErrorKind::InputScanError)
        );
        assert_eq!(
            Complex::<f32>::from_value(Value::Complex(Complex64::new(0.0, -1e300))),
            Err(ErrorKind::InputScanError)
        );
        assert!(f32::from_value(Value::Real(f64::INFINITY))
            .unwrap()
            .is_infinite());
    }

    #[test]
    fn test_wrong_field_is_unsupported() {
        assert_eq!(i64::from_value(Value::Real(1.5)), Err(ErrorKind::UnsupportedType));
        assert_eq!(
            f64::from_value(Value::Complex(Complex64::new(1.0, 1.0))),
            Err(ErrorKind::UnsupportedType)
        );
    }
}
