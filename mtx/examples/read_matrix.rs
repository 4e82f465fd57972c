//! Read a Matrix Market file and print a summary

use mtx::read_dynamic;
use std::fs::File;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = "example_matrix.mtx";

    if !std::path::Path::new(filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    let start = Instant::now();
    // storage is picked from the file's banner
    let matrix = read_dynamic(File::open(filename)?)?;
    println!("Read matrix in {:?}", start.elapsed());

    let (rows, cols) = matrix.dimensions();
    println!("\nMatrix Information:");
    println!("   Dimensions: {rows} x {cols}");
    println!("   Stored entries: {}", matrix.nnz());
    println!("   Format: {}", matrix.format());
    println!("   Field: {}", matrix.field());

    for (row, col) in [(0, 0), (1, 0), (0, 1), (5, 9)] {
        match matrix.get_element(row, col) {
            Some(value) => println!("   matrix[{row}, {col}] = {}", value.re()),
            None => println!("   matrix[{row}, {col}] is not stored"),
        }
    }
    Ok(())
}
