use matgen_core::{Dims, MatrixGenerator};
use matgen_text::format_block;

fn main() {
    let mut generator = MatrixGenerator::new(1);

    let first = generator.generate(Dims::new(4, 3));
    let second = generator.generate(Dims::new(3, 5));

    println!("Matrix pair (Seed: 1)");
    println!("=====================\n");

    print!("{}", format_block(&first));
    print!("{}", format_block(&second));

    // Print statistics
    println!();
    println!("Statistics:");
    println!("-----------");
    for (name, matrix) in [("First", &first), ("Second", &second)] {
        match matrix.value_range() {
            Some((lo, hi)) => println!(
                "{}: {}x{}, {} cells, values {}..{}",
                name,
                matrix.rows(),
                matrix.cols(),
                matrix.cells().len(),
                lo,
                hi
            ),
            None => println!("{}: {}x{}, empty", name, matrix.rows(), matrix.cols()),
        }
    }
}
