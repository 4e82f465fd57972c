//! Decode driver
//!
//! Reads the banner, validates it against the supported type table, reads the
//! shape line, then feeds every data line through the element decoder and the
//! symmetry expander into a [`MatrixSink`].

use crate::io::LineReader;
use crate::{DynamicMatrix, Error, MarketConfig, Result};
use mtx_core::format::registry;
use mtx_core::validation::{is_blank, is_comment};
use mtx_core::{ErrorKind, MarketElement, MatrixSink, Shape, SymmetryExpander, TypeDescriptor};
use std::io::BufRead;
use tracing::{debug, trace};

/// Read the banner line, skipping leading blank lines
fn read_header<R: BufRead>(input: &mut LineReader<R>) -> Result<TypeDescriptor> {
    while let Some((number, line)) = input.next_line()? {
        if is_blank(line) {
            continue;
        }
        return TypeDescriptor::parse_banner(line).map_err(|kind| Error::at_line(kind, number));
    }

    Err(ErrorKind::PrematureEof.into())
}

/// Read the shape line, skipping comments and blank lines before it
fn read_shape<R: BufRead>(input: &mut LineReader<R>, descriptor: &TypeDescriptor) -> Result<Shape> {
    while let Some((number, line)) = input.next_line()? {
        if is_blank(line) {
            continue;
        }
        if is_comment(line) {
            trace!(line = number, "skipping comment");
            continue;
        }
        return Shape::parse(line, descriptor.format).map_err(|kind| Error::at_line(kind, number));
    }

    Err(ErrorKind::PrematureEof.into())
}

/// Decode a Matrix Market stream into `sink`
///
/// Returns the number of bytes consumed from `reader`. On failure the sink
/// may hold a partially populated matrix and should be discarded.
pub fn decode<R, S>(reader: R, sink: &mut S, config: &MarketConfig) -> Result<u64>
where
    R: BufRead,
    S: MatrixSink + ?Sized,
{
    let mut input = LineReader::new(reader, config.max_line_length);
    let descriptor = read_header(&mut input)?;
    decode_body(&mut input, &descriptor, sink)
}

/// Decode a Matrix Market stream into storage chosen from its banner
///
/// Array files are read into a [`DenseMatrix`](crate::DenseMatrix) and
/// coordinate files into a [`CooMatrix`](crate::CooMatrix), holding `f64`,
/// `i64` or [`Complex64`](crate::Complex64) values by field. Returns the
/// matrix and the number of bytes consumed.
pub fn decode_dynamic<R: BufRead>(reader: R, config: &MarketConfig) -> Result<(DynamicMatrix, u64)> {
    let mut input = LineReader::new(reader, config.max_line_length);
    let descriptor = read_header(&mut input)?;

    let mut matrix = DynamicMatrix::for_descriptor(&descriptor)
        .ok_or_else(|| Error::at_line(ErrorKind::UnsupportedType, input.line_number()))?;

    let total = match &mut matrix {
        DynamicMatrix::DenseReal(m) => decode_body(&mut input, &descriptor, m)?,
        DynamicMatrix::DenseInteger(m) => decode_body(&mut input, &descriptor, m)?,
        DynamicMatrix::DenseComplex(m) => decode_body(&mut input, &descriptor, m)?,
        DynamicMatrix::CooReal(m) => decode_body(&mut input, &descriptor, m)?,
        DynamicMatrix::CooInteger(m) => decode_body(&mut input, &descriptor, m)?,
        DynamicMatrix::CooComplex(m) => decode_body(&mut input, &descriptor, m)?,
        DynamicMatrix::CooPattern(m) => decode_body(&mut input, &descriptor, m)?,
    };

    Ok((matrix, total))
}

/// Everything after the banner: type check, shape line and data lines
fn decode_body<R, S>(input: &mut LineReader<R>, descriptor: &TypeDescriptor, sink: &mut S) -> Result<u64>
where
    R: BufRead,
    S: MatrixSink + ?Sized,
{
    let registered = descriptor
        .index()
        .and_then(registry::get)
        .ok_or_else(|| Error::at_line(ErrorKind::UnsupportedType, input.line_number()))?;
    debug!(header = %descriptor, index = ?descriptor.index(), "accepted header");

    if !<S::Element as MarketElement>::accepts(descriptor.field) {
        debug!(field = %descriptor.field, "sink element type cannot hold field");
        return Err(Error::at_line(ErrorKind::UnsupportedType, input.line_number()));
    }

    let shape = read_shape(input, descriptor)?;
    debug!(
        rows = shape.rows,
        cols = shape.cols,
        entries = shape.entries,
        "read shape"
    );

    let shape_line = input.line_number();
    sink.reserve(descriptor, &shape).map_err(|kind| Error::at_line(kind, shape_line))?;

    let mut expander = SymmetryExpander::new(descriptor.format, descriptor.symmetry, shape)
        .map_err(|kind| Error::at_line(kind, shape_line))?;
    let strategy = registered.strategy;

    while let Some((number, line)) = input.next_line()? {
        if is_blank(line) {
            continue;
        }

        let cells = strategy
            .decode(line)
            .and_then(|decoded| expander.expand(decoded))
            .map_err(|kind| Error::at_line(kind, number))?;

        for entry in cells {
            let value = <S::Element as MarketElement>::from_value(entry.value)
                .map_err(|kind| Error::at_line(kind, number))?;
            sink.set_element(entry.row, entry.col, value);
        }
    }

    expander
        .finish()
        .map_err(|kind| Error::at_line(kind, input.line_number()))?;

    let total = input.bytes_consumed();
    debug!(bytes = total, lines = expander.lines(), "decoded matrix");
    Ok(total)
}
