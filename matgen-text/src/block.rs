use matgen_core::{Dims, Matrix};
use std::fmt;
use std::io::{self, Write};

/// Error type for matrix block parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "matrix parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Format a matrix as a block: a row-count line, a column-count line, then
/// one line per row with cells separated by single spaces.
/// Every line is newline-terminated; a zero-column row is an empty line.
pub fn format_block(matrix: &Matrix) -> String {
    let mut result = String::new();

    result.push_str(&matrix.rows().to_string());
    result.push('\n');
    result.push_str(&matrix.cols().to_string());
    result.push('\n');

    for row in matrix.rows_iter() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        result.push_str(&cells.join(" "));
        result.push('\n');
    }

    result
}

/// Write a matrix block to a stream (same layout as `format_block`)
pub fn write_block<W: Write>(out: &mut W, matrix: &Matrix) -> io::Result<()> {
    writeln!(out, "{}", matrix.rows())?;
    writeln!(out, "{}", matrix.cols())?;

    for row in matrix.rows_iter() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", cells.join(" "))?;
    }

    Ok(())
}

/// Parse exactly one matrix block from a string.
/// Trailing blank lines are tolerated; any other trailing content is an error.
pub fn parse_block(input: &str) -> Result<Matrix, ParseError> {
    let mut lines = input.lines();

    let rows_line = lines.next().ok_or_else(|| ParseError {
        message: "missing row count line".to_string(),
    })?;
    let rows = parse_count_line(rows_line, "row count")?;

    let cols_line = lines.next().ok_or_else(|| ParseError {
        message: "missing column count line".to_string(),
    })?;
    let cols = parse_count_line(cols_line, "column count")?;

    let dims = Dims::new(rows, cols);
    let mut cells = Vec::new();

    for row in 0..rows {
        let line = lines.next().ok_or_else(|| ParseError {
            message: format!("missing row {} of {}", row + 1, rows),
        })?;
        parse_row_line(line, row, cols, &mut cells)?;
    }

    for leftover in lines {
        if !leftover.trim().is_empty() {
            return Err(ParseError {
                message: format!("unexpected content after block: '{}'", leftover.trim()),
            });
        }
    }

    Matrix::from_cells(dims, cells).ok_or_else(|| ParseError {
        message: "cell count does not match dimensions".to_string(),
    })
}

/// Parse a header line holding a single non-negative count
pub(crate) fn parse_count_line(line: &str, which: &str) -> Result<u32, ParseError> {
    let text = line.trim();
    text.parse::<u32>().map_err(|e| ParseError {
        message: format!("invalid {} '{}': {}", which, text, e),
    })
}

/// Parse one body line into exactly `cols` integers, appended to `cells`
pub(crate) fn parse_row_line(
    line: &str,
    row: u32,
    cols: u32,
    cells: &mut Vec<i32>,
) -> Result<(), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() != cols as usize {
        return Err(ParseError {
            message: format!(
                "row {}: expected {} values, got {}",
                row + 1,
                cols,
                tokens.len()
            ),
        });
    }

    for token in tokens {
        let value = token.parse::<i32>().map_err(|e| ParseError {
            message: format!("row {}: invalid value '{}': {}", row + 1, token, e),
        })?;
        cells.push(value);
    }

    Ok(())
}
