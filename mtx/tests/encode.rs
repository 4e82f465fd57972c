use mtx::{
    to_string, write_matrix, Complex64, CooMatrix, DenseMatrix, ErrorKind, MarketConfig,
    MatrixMarket,
};

#[test]
fn test_complex_dense_scenario() {
    // [[0.5-0.1i, -0.3+0.2i], [0.1+0.05i, 0.4+0i]]
    let m = DenseMatrix::from_fn(2, 2, |i, j| match (i, j) {
        (0, 0) => Complex64::new(0.5, -0.1),
        (0, 1) => Complex64::new(-0.3, 0.2),
        (1, 0) => Complex64::new(0.1, 0.05),
        _ => Complex64::new(0.4, 0.0),
    });

    let text = to_string(&m).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "%%MatrixMarket matrix array complex general",
            "2 2",
            " 0.5 -0.1",
            " 0.1  0.05",
            "-0.3  0.2",
            " 0.4  0",
        ]
    );

    let back: DenseMatrix<Complex64> = mtx::from_bytes(text.as_bytes()).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_aligned_complex_array() {
    let m = DenseMatrix::from_column_major(
        2,
        2,
        vec![
            Complex64::new(0.9448533463379065, -0.15409123867778085),
            Complex64::new(-0.6587457732573583, 0.8975666640458155),
            Complex64::new(-0.681501551465435, 0.5945703215956311),
            Complex64::new(0.4026962903538138, 0.009438983689089353),
        ],
    )
    .unwrap();

    let text = to_string(&m).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "%%MatrixMarket matrix array complex general",
            "2 2",
            " 0.9448533463379065 -0.15409123867778085",
            "-0.6587457732573583  0.8975666640458155",
            "-0.681501551465435   0.5945703215956311",
            " 0.4026962903538138  0.009438983689089353",
        ]
    );
}

#[test]
fn test_coordinate_real_output() {
    let mut m = CooMatrix::new(4, 5);
    m.set(0, 0, 0.9448533463379065).unwrap();
    m.set(1, 1, 0.8975666640458155).unwrap();
    m.set(2, 2, 0.4026962903538138).unwrap();

    let mut buf = Vec::new();
    let n = write_matrix(&mut buf, &m).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(
        text,
        "%%MatrixMarket matrix coordinate real general\n\
         %\n\
         4 5 3\n\
         \x201  1  0.9448533463379065\n\
         \x202  2  0.8975666640458155\n\
         \x203  3  0.4026962903538138\n"
    );
    assert_eq!(n, text.len() as u64);
}

#[test]
fn test_coordinate_integer_output() {
    let mut m = CooMatrix::new(12, 2);
    m.set(0, 0, 7i64).unwrap();
    m.set(11, 1, -120).unwrap();

    let text = to_string(&m).unwrap();
    let lines: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(lines, ["  1  1    7", " 12  2 -120"]);
}

#[test]
fn test_natural_order_is_preserved() {
    let mut m = CooMatrix::new(3, 3);
    m.set(2, 2, 1i32).unwrap();
    m.set(0, 1, 2).unwrap();

    let text = to_string(&m).unwrap();
    let lines: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(lines, [" 3  3  1", " 1  2  2"]);
}

#[test]
fn test_empty_matrices() {
    let m = CooMatrix::<f64>::new(3, 4);
    assert_eq!(
        to_string(&m).unwrap(),
        "%%MatrixMarket matrix coordinate real general\n%\n3 4 0\n"
    );

    let m = DenseMatrix::<f64>::new(0, 0);
    assert_eq!(
        to_string(&m).unwrap(),
        "%%MatrixMarket matrix array real general\n0 0\n"
    );
}

#[test]
fn test_precision_and_comment() {
    let market = MatrixMarket::new(
        MarketConfig::default()
            .with_precision(2)
            .with_comment(" written by a test"),
    );

    let m = DenseMatrix::from_column_major(2, 1, vec![1.0, -2.5]).unwrap();
    assert_eq!(
        market.write_string(&m).unwrap(),
        "%%MatrixMarket matrix array real general\n2 1\n 1.00\n-2.50\n"
    );

    let mut c = CooMatrix::new(1, 1);
    c.set(0, 0, 3.0f32).unwrap();
    assert_eq!(
        market.write_string(&c).unwrap(),
        "%%MatrixMarket matrix coordinate real general\n% written by a test\n1 1 1\n 1  1  3.00\n"
    );
}

#[test]
fn test_symmetric_input_is_written_general() {
    let text = "%%MatrixMarket matrix array real symmetric\n2 2\n1\n2\n3\n";
    let m: DenseMatrix<f64> = mtx::from_bytes(text.as_bytes()).unwrap();
    assert_eq!(
        to_string(&m).unwrap(),
        "%%MatrixMarket matrix array real general\n2 2\n 1\n 2\n 2\n 3\n"
    );
}

#[test]
fn test_write_failure_is_unwritable() {
    struct Full;

    impl std::io::Write for Full {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "full"))
        }
    }

    let m = DenseMatrix::<i32>::new(2, 2);
    let err = write_matrix(Full, &m).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unwritable);
}
