use super::{field, LITERAL_RECORD_SIZE, MATCH_RECORD_SIZE};
use crate::error::{Error, Result};
use crate::lz::Token;
use std::io::Write;

/// Writes tokens as fixed-size little-endian records
pub struct TokenWriter<W: Write> {
    writer: W,
    /// Total bytes written
    bytes_written: u64,
    tokens_written: u64,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, bytes_written: 0, tokens_written: 0 }
    }

    /// Write a single token record
    pub fn write_token(&mut self, token: &Token) -> Result<()> {
        match *token {
            Token::Literal(byte) => {
                let mut record = [0u8; LITERAL_RECORD_SIZE];
                record[8] = byte;
                self.writer.write_all(&record)?;
                self.bytes_written += LITERAL_RECORD_SIZE as u64;
            }
            Token::Match { offset, length } => {
                if length == 0 {
                    return Err(Error::ZeroLengthMatch { offset });
                }
                let mut record = [0u8; MATCH_RECORD_SIZE];
                record[..4].copy_from_slice(&field(offset)?.to_le_bytes());
                record[4..].copy_from_slice(&field(length)?.to_le_bytes());
                self.writer.write_all(&record)?;
                self.bytes_written += MATCH_RECORD_SIZE as u64;
            }
        }
        self.tokens_written += 1;
        Ok(())
    }

    /// Write every token in order
    pub fn write_tokens(&mut self, tokens: &[Token]) -> Result<()> {
        for token in tokens {
            self.write_token(token)?;
        }
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn tokens_written(&self) -> u64 {
        self.tokens_written
    }

    /// Flush and finish writing
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
