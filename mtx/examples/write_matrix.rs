//! Write a tridiagonal sparse matrix to a Matrix Market file

use mtx::{write_matrix, CooMatrix};
use std::fs::File;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = "example_matrix.mtx";
    let n = 1_000;

    // Tridiagonal matrix: 2 on the diagonal, -1 above and below
    let mut matrix = CooMatrix::new(n, n);
    for i in 0..n {
        matrix.set(i, i, 2.0)?;
        if i + 1 < n {
            matrix.set(i + 1, i, -1.0)?;
            matrix.set(i, i + 1, -1.0)?;
        }
    }
    println!("Matrix dimensions: {n} x {n}, {} stored entries", matrix.len());

    let start = Instant::now();
    let bytes = write_matrix(File::create(filename)?, &matrix)?;
    println!("Wrote {bytes} bytes to '{filename}' in {:?}", start.elapsed());
    println!("\nRun 'cargo run --example read_matrix' to read it back!");
    Ok(())
}
