use matgen_core::{Dims, MatrixGenerator};
use matgen_text::write_block;
use std::env;
use std::io::{self, Write};

const USAGE: &str = "Enter the dimensions of the two input matrices";

fn main() {
    let args: Vec<String> = env::args().collect();

    // Exactly four dimension arguments; anything else gets the usage
    // notice on stdout and a clean exit, whatever the arguments look like
    if args.len() != 5 {
        println!("{}", USAGE);
        return;
    }

    let mut generator = MatrixGenerator::from_entropy();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Each pair is parsed right before its matrix is emitted: a bad value
    // in positions 3-4 still leaves the first block on stdout
    for pair in args[1..].chunks(2) {
        let dims = match Dims::parse(&pair[0], &pair[1]) {
            Ok(dims) => dims,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };

        let matrix = generator.generate(dims);

        if let Err(e) = write_block(&mut out, &matrix) {
            eprintln!("Error writing to stdout: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = out.flush() {
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
