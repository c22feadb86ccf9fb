//! matrix-validator: Validate generated matrix streams
//!
//! This tool reads matrix blocks from stdin (the gen-matrix output format)
//! and checks that every cell falls inside the expected value range. The
//! structural invariants (header echo, row and column counts, integer cells)
//! are enforced by the block parser itself; a malformed stream is an error,
//! not a failed block.
//!
//! # Usage
//!
//! ```bash
//! # Validate a freshly generated pair of matrices
//! gen-matrix 4 3 3 5 | matrix-validator --pairs
//!
//! # Keep going after failures and show each block's status
//! matrix-validator -c -v < capture.txt
//! ```
//!
//! # Exit Codes
//!
//! - 0: All blocks pass
//! - 1: One or more blocks failed
//! - 2: Error (malformed stream, read error)

use clap::Parser;
use matgen_core::{Matrix, VALUE_MAX, VALUE_MIN};
use matgen_text::BlockReader;
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "matrix-validator")]
#[command(about = "Validate generated matrix streams")]
#[command(
    long_about = "Reads matrix blocks from stdin and validates cell values against the expected range.\n\n\
    Exit codes:\n  \
    0 = All blocks pass\n  \
    1 = One or more blocks failed\n  \
    2 = Error"
)]
struct Args {
    /// Smallest allowed cell value
    #[arg(long = "min", default_value_t = VALUE_MIN)]
    min: i32,

    /// Largest allowed cell value
    #[arg(long = "max", default_value_t = VALUE_MAX)]
    max: i32,

    /// Require an even number of blocks (the generator emits two per run)
    #[arg(long = "pairs")]
    pairs: bool,

    /// Show each block's pass/fail status (verbose output)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Continue processing even after failures (default: stop on first failure)
    #[arg(short = 'c', long = "continue")]
    continue_on_failure: bool,

    /// Quiet mode - only set the exit code
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Find the first out-of-range cell, if any
fn first_out_of_range(matrix: &Matrix, min: i32, max: i32) -> Option<(u32, u32, i32)> {
    for row in 0..matrix.rows() {
        for col in 0..matrix.cols() {
            let value = matrix.get(row, col);
            if value < min || value > max {
                return Some((row, col, value));
            }
        }
    }
    None
}

fn main() {
    let args = Args::parse();

    if args.min > args.max {
        eprintln!(
            "Invalid range: --min {} is greater than --max {}",
            args.min, args.max
        );
        std::process::exit(2);
    }

    let start_time = Instant::now();
    let stdin = io::stdin();
    let mut reader = BlockReader::new(stdin.lock());
    let mut stdout = io::stdout().lock();

    let mut total_blocks = 0usize;
    let mut passed_blocks = 0usize;
    let mut failed_blocks = 0usize;

    loop {
        let matrix = match reader.next_block() {
            Ok(Some(matrix)) => matrix,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Error reading block {}: {}", total_blocks + 1, e);
                std::process::exit(2);
            }
        };

        total_blocks += 1;

        match first_out_of_range(&matrix, args.min, args.max) {
            None => {
                passed_blocks += 1;
                if args.verbose {
                    writeln!(
                        stdout,
                        "PASS: block #{} ({}x{})",
                        total_blocks,
                        matrix.rows(),
                        matrix.cols()
                    )
                    .unwrap();
                }
            }
            Some((row, col, value)) => {
                failed_blocks += 1;
                if args.verbose {
                    writeln!(
                        stdout,
                        "FAIL: block #{} ({}x{})",
                        total_blocks,
                        matrix.rows(),
                        matrix.cols()
                    )
                    .unwrap();
                }
                if !args.continue_on_failure {
                    if !args.quiet {
                        eprintln!();
                        eprintln!("First failing block (#{}):", total_blocks);
                        print_block_details(&matrix, row, col, value);
                    }
                    std::process::exit(1);
                }
            }
        }
    }

    let elapsed = start_time.elapsed();

    // Print summary
    if !args.quiet {
        eprintln!();
        eprintln!("=== Validation Summary ===");
        eprintln!("Value range: [{}, {}]", args.min, args.max);
        eprintln!("Total blocks: {}", total_blocks);
        eprintln!(
            "Passed:       {} ({:.1}%)",
            passed_blocks,
            if total_blocks > 0 {
                100.0 * passed_blocks as f64 / total_blocks as f64
            } else {
                0.0
            }
        );
        eprintln!(
            "Failed:       {} ({:.1}%)",
            failed_blocks,
            if total_blocks > 0 {
                100.0 * failed_blocks as f64 / total_blocks as f64
            } else {
                0.0
            }
        );
        eprintln!("Time:         {:.3}s", elapsed.as_secs_f64());
    }

    if args.pairs && total_blocks % 2 != 0 {
        if !args.quiet {
            eprintln!();
            eprintln!(
                "❌ VALIDATION FAILED: odd number of blocks ({}), expected complete pairs",
                total_blocks
            );
        }
        std::process::exit(1);
    }

    if failed_blocks > 0 {
        if !args.quiet {
            eprintln!();
            eprintln!(
                "❌ VALIDATION FAILED: {} blocks had out-of-range cells",
                failed_blocks
            );
        }
        std::process::exit(1);
    } else if total_blocks > 0 {
        if !args.quiet {
            eprintln!();
            eprintln!("✅ VALIDATION PASSED: All {} blocks in range", total_blocks);
        }
        std::process::exit(0);
    } else {
        if !args.quiet {
            eprintln!();
            eprintln!("⚠️  No blocks to validate");
        }
        std::process::exit(0);
    }
}

/// Print details about a failing block for debugging
fn print_block_details(matrix: &Matrix, row: u32, col: u32, value: i32) {
    eprintln!();
    eprintln!(
        "  Dimensions: {} rows x {} cols",
        matrix.rows(),
        matrix.cols()
    );
    if let Some((lo, hi)) = matrix.value_range() {
        eprintln!("  Cell values: min {}, max {}", lo, hi);
    }
    eprintln!(
        "  First out-of-range cell: row {}, col {} = {}",
        row + 1,
        col + 1,
        value
    );
}
