mod block;
mod reader;

pub use block::{format_block, parse_block, write_block, ParseError};
pub use reader::BlockReader;
