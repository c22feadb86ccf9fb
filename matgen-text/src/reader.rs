use crate::block::{parse_count_line, parse_row_line, ParseError};
use matgen_core::{Dims, Matrix};
use std::io::BufRead;

/// Pull parser over a stream of consecutive matrix blocks.
///
/// Blocks follow each other back to back; blank lines between blocks are
/// skipped. Body lines are counted, not sniffed, so the empty body lines of
/// a zero-column matrix are consumed as rows rather than separators.
pub struct BlockReader<R> {
    input: R,
}

impl<R: BufRead> BlockReader<R> {
    /// Wrap a buffered reader
    pub fn new(input: R) -> Self {
        BlockReader { input }
    }

    /// Read the next block.
    /// Returns Ok(None) at a clean end of stream (only blank lines remain).
    pub fn next_block(&mut self) -> Result<Option<Matrix>, ParseError> {
        let rows_line = loop {
            match self.read_line()? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
            }
        };
        let rows = parse_count_line(&rows_line, "row count")?;

        let cols_line = self.require_line("column count line")?;
        let cols = parse_count_line(&cols_line, "column count")?;

        let dims = Dims::new(rows, cols);
        let mut cells = Vec::new();

        for row in 0..rows {
            let line = self.require_line(&format!("row {} of {}", row + 1, rows))?;
            parse_row_line(&line, row, cols, &mut cells)?;
        }

        match Matrix::from_cells(dims, cells) {
            Some(matrix) => Ok(Some(matrix)),
            None => Err(ParseError {
                message: "cell count does not match dimensions".to_string(),
            }),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, ParseError> {
        let mut buffer = String::new();
        let read = self.input.read_line(&mut buffer).map_err(|e| ParseError {
            message: format!("read error: {}", e),
        })?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buffer))
    }

    fn require_line(&mut self, what: &str) -> Result<String, ParseError> {
        self.read_line()?.ok_or_else(|| ParseError {
            message: format!("unexpected end of input: missing {}", what),
        })
    }
}
