//! Fixed-size binary records for token sequences.
//!
//! Each record starts with two little-endian `u32` fields `(a, b)`. `b == 0`
//! marks a literal and is followed by the literal byte; `b > 0` is a match
//! with offset `a` and length `b`. There is no header or count: the stream
//! simply ends, and a trailing partial record is dropped.

pub mod reader;
pub mod writer;

pub use reader::TokenReader;
pub use writer::TokenWriter;

use crate::error::{Error, Result};
use crate::lz::Token;

/// Size of the `(a, b)` field pair
pub const RECORD_HEADER_SIZE: usize = 8;

/// Match records are just the field pair
pub const MATCH_RECORD_SIZE: usize = RECORD_HEADER_SIZE;

/// Literal records carry one extra raw byte
pub const LITERAL_RECORD_SIZE: usize = RECORD_HEADER_SIZE + 1;

/// Narrow a position or length to a record field
fn field(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::FieldOverflow { value })
}

/// Serialized size of `tokens` in bytes
pub fn encoded_len(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .map(|t| if t.is_literal() { LITERAL_RECORD_SIZE } else { MATCH_RECORD_SIZE })
        .sum()
}

/// Serialize tokens into a new buffer
pub fn encode_tokens(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut writer = TokenWriter::new(Vec::with_capacity(encoded_len(tokens)));
    writer.write_tokens(tokens)?;
    writer.finish()
}

/// Deserialize tokens from a buffer, ignoring a truncated final record
pub fn decode_tokens(bytes: &[u8]) -> Result<Vec<Token>> {
    TokenReader::new(bytes).read_all()
}
