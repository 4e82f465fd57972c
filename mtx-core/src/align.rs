//! Column alignment for encoded data lines
//!
//! Encoding runs two passes over the values. The first pass feeds every value
//! to [`LineAligner::observe`] so each logical column learns its widest
//! characteristic (sign slot plus integer digits) and widest fraction. The
//! second pass renders with [`LineAligner::render`], padding so decimal points
//! line up down a column.
//!
//! Every non-negative number gets a leading space in place of a sign.

use alloc::format;
use alloc::string::String;

use crate::format::Field;
use crate::value::Value;
use crate::{ErrorKind, Result};

/// How floats are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatStyle {
    /// Fixed number of fractional digits, shortest form when `None`
    pub precision: Option<usize>,
    /// Values originate from `f32` storage
    pub single: bool,
}

/// Text of a float with the sign slot filled in
///
/// Without a precision this is the shortest decimal form that parses back to
/// the same value at the storage width, never in exponent notation.
fn float_text(v: f64, style: FloatStyle) -> String {
    let text = match (style.precision, style.single) {
        (Some(p), _) => format!("{v:.p$}"),
        (None, true) => format!("{}", v as f32),
        (None, false) => format!("{v}"),
    };
    with_sign_slot(text)
}

fn int_text(v: i64) -> String {
    with_sign_slot(format!("{v}"))
}

fn with_sign_slot(text: String) -> String {
    if text.starts_with('-') {
        text
    } else {
        format!(" {text}")
    }
}

/// Width of the part left of the decimal point, sign slot included
fn characteristic(text: &str) -> usize {
    text.find('.').unwrap_or(text.len())
}

fn pad(out: &mut String, n: usize) {
    out.extend(core::iter::repeat(' ').take(n));
}

/// Right-aligning width accumulator for integer columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntAligner(usize);

impl IntAligner {
    pub fn width(&self) -> usize {
        self.0
    }

    pub fn observe(&mut self, v: i64) {
        self.0 = self.0.max(int_text(v).len());
    }

    pub fn render_into(&self, out: &mut String, v: i64) {
        let text = int_text(v);
        pad(out, self.0.saturating_sub(text.len()));
        out.push_str(&text);
    }
}

/// Decimal-point aligning accumulator for float columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatAligner {
    /// Widest characteristic seen
    pub left: usize,
    /// Widest remainder (point and fraction) seen
    pub right: usize,
}

impl FloatAligner {
    pub fn observe(&mut self, v: f64, style: FloatStyle) {
        let text = float_text(v, style);
        let c = characteristic(&text);
        self.left = self.left.max(c);
        self.right = self.right.max(text.len() - c);
    }

    /// Render with leading padding only
    pub fn render_into(&self, out: &mut String, v: f64, style: FloatStyle) {
        let text = float_text(v, style);
        pad(out, self.left.saturating_sub(characteristic(&text)));
        out.push_str(&text);
    }

    /// Render padded on both sides to the full column width
    pub fn render_padded_into(&self, out: &mut String, v: f64, style: FloatStyle) {
        let start = out.len();
        self.render_into(out, v, style);
        let written = out.len() - start;
        pad(out, (self.left + self.right).saturating_sub(written));
    }
}

/// Independent float columns for the real and imaginary parts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexAligner {
    pub re: FloatAligner,
    pub im: FloatAligner,
}

impl ComplexAligner {
    pub fn observe(&mut self, re: f64, im: f64, style: FloatStyle) {
        self.re.observe(re, style);
        self.im.observe(im, style);
    }

    pub fn render_into(&self, out: &mut String, re: f64, im: f64, style: FloatStyle) {
        self.re.render_padded_into(out, re, style);
        out.push(' ');
        self.im.render_into(out, im, style);
    }
}

/// Value column layout chosen by field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueColumns {
    Real(FloatAligner),
    Integer(IntAligner),
    Complex(ComplexAligner),
    Pattern,
}

/// Alignment state for every column of a data line
///
/// Coordinates are passed 0-based and rendered 1-based. Array lines pass
/// `None` for the coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAligner {
    row: IntAligner,
    col: IntAligner,
    value: ValueColumns,
    style: FloatStyle,
}

impl LineAligner {
    pub fn new(field: Field, style: FloatStyle) -> Self {
        let value = match field {
            Field::Real => ValueColumns::Real(FloatAligner::default()),
            Field::Integer => ValueColumns::Integer(IntAligner::default()),
            Field::Complex => ValueColumns::Complex(ComplexAligner::default()),
            Field::Pattern => ValueColumns::Pattern,
        };

        Self {
            row: IntAligner::default(),
            col: IntAligner::default(),
            value,
            style,
        }
    }

    /// First pass: widen columns to fit this line
    ///
    /// Fails with `UnsupportedType` when the value is not of the column's
    /// field.
    pub fn observe(&mut self, coordinate: Option<(usize, usize)>, value: &Value) -> Result<()> {
        let style = self.style;
        match (&mut self.value, *value) {
            (ValueColumns::Real(a), Value::Real(v)) => a.observe(v, style),
            (ValueColumns::Integer(a), Value::Integer(v)) => a.observe(v),
            (ValueColumns::Complex(a), Value::Complex(z)) => a.observe(z.re, z.im, style),
            (ValueColumns::Pattern, Value::Pattern) => {}
            _ => return Err(ErrorKind::UnsupportedType),
        }

        if let Some((row, col)) = coordinate {
            self.row.observe(one_based(row));
            self.col.observe(one_based(col));
        }
        Ok(())
    }

    /// Second pass: append one aligned line, without the newline
    pub fn render_into(&self, out: &mut String, coordinate: Option<(usize, usize)>, value: &Value) {
        if let Some((row, col)) = coordinate {
            self.row.render_into(out, one_based(row));
            out.push(' ');
            self.col.render_into(out, one_based(col));
            if self.value == ValueColumns::Pattern {
                return;
            }
            out.push(' ');
        }

        match (&self.value, *value) {
            (ValueColumns::Real(a), Value::Real(v)) => a.render_into(out, v, self.style),
            (ValueColumns::Integer(a), Value::Integer(v)) => a.render_into(out, v),
            (ValueColumns::Complex(a), Value::Complex(z)) => {
                a.render_into(out, z.re, z.im, self.style)
            }
            // mismatched values are rejected by `observe`
            _ => {}
        }
    }

    /// Second pass: one aligned line as an owned string
    pub fn render(&self, coordinate: Option<(usize, usize)>, value: &Value) -> String {
        let mut out = String::new();
        self.render_into(&mut out, coordinate, value);
        out
    }
}

fn one_based(index: usize) -> i64 {
    i64::try_from(index).map_or(i64::MAX, |i| i.saturating_add(1))
}
