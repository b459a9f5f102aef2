use super::RECORD_HEADER_SIZE;
use crate::error::{Error, Result};
use crate::lz::Token;
use std::io::Read;

/// Reads fixed-size token records until the stream runs out.
///
/// A record cut short by the end of the stream is not an error: it ends the
/// token sequence, and the number of discarded bytes is kept for reporting.
pub struct TokenReader<R: Read> {
    reader: R,
    /// Total bytes read (for statistics)
    bytes_read: u64,
    /// Bytes of a partial trailing record that were dropped
    truncated_bytes: usize,
    finished: bool,
}

impl<R: Read> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, bytes_read: 0, truncated_bytes: 0, finished: false }
    }

    /// Fill `buf` as far as the stream allows, returning how many bytes were read
    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => {
                    // The stream position is unknown after a failure
                    self.finished = true;
                    return Err(Error::Io(e));
                }
            }
        }
        self.bytes_read += filled as u64;
        Ok(filled)
    }

    /// Read the next token, or `None` at end of stream
    pub fn read_token(&mut self) -> Result<Option<Token>> {
        if self.finished {
            return Ok(None);
        }

        let mut header = [0u8; RECORD_HEADER_SIZE];
        let got = self.read_up_to(&mut header)?;
        if got < RECORD_HEADER_SIZE {
            self.finished = true;
            self.truncated_bytes = got;
            return Ok(None);
        }

        let field_a = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        let field_b = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

        if field_b > 0 {
            return Ok(Some(Token::Match { offset: field_a as usize, length: field_b as usize }));
        }

        let mut literal = [0u8; 1];
        if self.read_up_to(&mut literal)? == 0 {
            self.finished = true;
            self.truncated_bytes = RECORD_HEADER_SIZE;
            return Ok(None);
        }
        Ok(Some(Token::Literal(literal[0])))
    }

    /// Read every remaining token
    pub fn read_all(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.read_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Bytes of an incomplete final record that were ignored
    pub fn truncated_bytes(&self) -> usize {
        self.truncated_bytes
    }
}

impl<R: Read> Iterator for TokenReader<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_token().transpose()
    }
}
