use super::tokens::Token;
use crate::error::{Error, Result};

/// Growing output buffer that resolves back-references against itself.
pub struct Reconstructor {
    output: Vec<u8>,
}

impl Reconstructor {
    pub fn new() -> Self {
        Self { output: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity) }
    }

    /// Add a single byte to the output
    #[inline]
    pub fn push_literal(&mut self, byte: u8) {
        self.output.push(byte);
    }

    /// Append `length` bytes copied from absolute position `offset`.
    ///
    /// Length can exceed the distance to the end of the output (run-length
    /// case). Byte `k` of the match is always `output[offset + k]`, read after
    /// the bytes before it were appended. Copies run in chunks of at most that
    /// distance, so every chunk's source already exists and memory grows only
    /// with the bytes actually produced.
    pub fn push_match(&mut self, offset: usize, length: usize) -> Result<()> {
        let available = self.output.len();
        if length > 0 && offset >= available {
            return Err(Error::DanglingMatchReference { offset, available });
        }
        if available.checked_add(length).is_none() {
            return Err(Error::OutputTooLarge { length });
        }

        let mut copied = 0;
        while copied < length {
            let src = offset + copied;
            let run = (self.output.len() - src).min(length - copied);
            self.output.try_reserve(run).map_err(|_| Error::OutputTooLarge { length })?;
            self.output.extend_from_within(src..src + run);
            copied += run;
        }
        Ok(())
    }

    /// Apply one token
    pub fn push(&mut self, token: &Token) -> Result<()> {
        match *token {
            Token::Literal(byte) => {
                self.push_literal(byte);
                Ok(())
            }
            Token::Match { offset, length } => self.push_match(offset, length),
        }
    }

    /// Bytes reconstructed so far
    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Finish and return the output bytes
    pub fn finish(self) -> Vec<u8> {
        self.output
    }
}

impl Default for Reconstructor {
    fn default() -> Self {
        Self::new()
    }
}

/// Replay `tokens` into the bytes they were factorized from.
pub fn reconstruct(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut out = Reconstructor::new();
    for token in tokens {
        out.push(token)?;
    }
    Ok(out.finish())
}
