//! Serializer
//!
//! Encoding always writes general symmetry. Array sources walk the full grid
//! in column-major order; coordinate sources emit their stored non-zero
//! entries in natural order. Data lines are aligned in two passes over the
//! source.

use crate::io::ByteCounter;
use crate::{Error, MarketConfig, Result};
use mtx_core::{
    ErrorKind, Field, FloatStyle, Format, LineAligner, MarketElement, MatrixSource, Symmetry,
    TypeDescriptor, Value,
};
use std::io::{BufWriter, Write};
use tracing::debug;

type Cell = (Option<(usize, usize)>, Value);

/// Every data line of `matrix` as (coordinate, value)
fn cells<'a, M>(matrix: &'a M, field: Field) -> Box<dyn Iterator<Item = Cell> + 'a>
where
    M: MatrixSource + ?Sized,
{
    let value = move |v: M::Element| match field {
        Field::Pattern => Value::Pattern,
        _ => v.to_value(),
    };

    match matrix.format() {
        Format::Array => {
            let (rows, cols) = matrix.dimensions();
            Box::new((0..cols).flat_map(move |j| {
                (0..rows).map(move |i| {
                    let v = matrix
                        .get_element(i, j)
                        .unwrap_or_else(<M::Element as MarketElement>::zero);
                    (None, value(v))
                })
            }))
        }
        Format::Coordinate => Box::new(
            matrix
                .entries()
                .filter(move |(_, _, v)| field == Field::Pattern || !v.is_zero())
                .map(move |(i, j, v)| (Some((i, j)), value(v))),
        ),
    }
}

/// Encode `matrix` as Matrix Market text
///
/// Returns the number of bytes written to `writer`.
pub fn encode<W, M>(writer: W, matrix: &M, config: &MarketConfig) -> Result<u64>
where
    W: Write,
    M: MatrixSource + ?Sized,
{
    let format = matrix.format();
    let field = matrix.field();
    let descriptor = TypeDescriptor::new(format, field, Symmetry::General);
    if !descriptor.is_supported() {
        return Err(ErrorKind::UnsupportedType.into());
    }

    let style = FloatStyle {
        precision: config.precision,
        single: <M::Element as MarketElement>::SINGLE_PRECISION,
    };
    let mut aligner = LineAligner::new(field, style);
    let mut lines = 0usize;
    for (coordinate, value) in cells(matrix, field) {
        aligner.observe(coordinate, &value)?;
        lines += 1;
    }

    let (rows, cols) = matrix.dimensions();
    let mut out = ByteCounter::new(BufWriter::new(writer));

    writeln!(out, "{descriptor}").map_err(Error::write)?;
    match format {
        Format::Coordinate => {
            writeln!(out, "%{}", config.comment).map_err(Error::write)?;
            writeln!(out, "{rows} {cols} {lines}").map_err(Error::write)?;
        }
        Format::Array => writeln!(out, "{rows} {cols}").map_err(Error::write)?,
    }

    let mut line = String::new();
    for (coordinate, value) in cells(matrix, field) {
        line.clear();
        aligner.render_into(&mut line, coordinate, &value);
        line.push('\n');
        out.write_all(line.as_bytes()).map_err(Error::write)?;
    }
    out.flush().map_err(Error::write)?;

    let total = out.total();
    debug!(header = %descriptor, lines, bytes = total, "encoded matrix");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CooMatrix, DenseMatrix};
    use std::io;

    struct Rejecting;

    impl Write for Rejecting {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    #[test]
    fn test_dense_real_output() {
        let m = DenseMatrix::from_column_major(2, 1, vec![1.5, -0.25]).unwrap();
        let mut buf = Vec::new();
        let n = encode(&mut buf, &m, &MarketConfig::default()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "%%MatrixMarket matrix array real general\n2 1\n 1.5\n-0.25\n"
        );
        assert_eq!(n, text.len() as u64);
    }

    #[test]
    fn test_pattern_output() {
        let mut m = CooMatrix::<f64>::pattern(3, 3);
        m.set(0, 0, 1.0).unwrap();
        m.set(2, 1, 1.0).unwrap();

        let mut buf = Vec::new();
        encode(&mut buf, &m, &MarketConfig::default().with_comment(" sparse")).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "%%MatrixMarket matrix coordinate pattern general\n% sparse\n3 3 2\n 1  1\n 3  2\n"
        );
    }

    #[test]
    fn test_coordinate_output_skips_zeros() {
        let mut m = CooMatrix::<f64>::new(2, 2);
        m.set(0, 0, 0.0).unwrap();
        m.set(1, 1, 2.0).unwrap();

        let mut buf = Vec::new();
        encode(&mut buf, &m, &MarketConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "%%MatrixMarket matrix coordinate real general\n%\n2 2 1\n 2  2  2\n"
        );

        // pattern entries are positions, whatever value is stored
        let mut p = CooMatrix::<i32>::pattern(1, 1);
        p.set(0, 0, 0).unwrap();
        let mut buf = Vec::new();
        encode(&mut buf, &p, &MarketConfig::default()).unwrap();
        assert!(String::from_utf8(buf).unwrap().ends_with("1 1 1\n 1  1\n"));
    }

    #[test]
    fn test_single_precision_values() {
        let m = DenseMatrix::from_column_major(2, 1, vec![0.1f32, -1.25]).unwrap();
        let mut buf = Vec::new();
        encode(&mut buf, &m, &MarketConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "%%MatrixMarket matrix array real general\n2 1\n 0.1\n-1.25\n"
        );
    }

    #[test]
    fn test_unwritable_sink() {
        let m = DenseMatrix::<f64>::new(1, 1);
        let err = encode(Rejecting, &m, &MarketConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unwritable);
    }
}
