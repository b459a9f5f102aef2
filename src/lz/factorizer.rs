use super::tokens::{Token, TokenSequence};
use crate::error::{Error, Result};
use crate::index::{IndexKind, SubstringIndex};

/// Factorize the sequence bound to `index` into literals and back-references.
///
/// At each scan position the longest prior match wins; without one a literal
/// is emitted. The suffix at the scan position is inserted before advancing,
/// so the index never holds a suffix starting at or after the next query.
pub fn factorize<I>(index: &mut I, data: &[u8]) -> Result<TokenSequence>
where
    I: SubstringIndex + ?Sized,
{
    if index.len() != data.len() {
        return Err(Error::Internal(format!(
            "index covers {} bytes but input has {}",
            index.len(),
            data.len()
        )));
    }

    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let found = index.longest_match(pos)?;
        index.insert(pos)?;

        match found {
            Some(m) => {
                if m.origin >= pos || m.length == 0 || pos + m.length > data.len() {
                    return Err(Error::Internal(format!(
                        "index returned invalid match {m:?} at position {pos}"
                    )));
                }
                tokens.push(Token::Match { offset: m.origin, length: m.length });
                pos += m.length;
            }
            None => {
                tokens.push(Token::Literal(data[pos]));
                pos += 1;
            }
        }
    }

    Ok(tokens)
}

/// Factorizer with a configurable index realization
#[derive(Clone, Copy, Debug, Default)]
pub struct Factorizer {
    kind: IndexKind,
}

impl Factorizer {
    pub fn new(kind: IndexKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> IndexKind {
        self.kind
    }

    /// Build a fresh index over `data` and factorize it.
    pub fn compress(&self, data: &[u8]) -> Result<TokenSequence> {
        self.compress_with_nodes(data).map(|(tokens, _)| tokens)
    }

    /// Like [`compress`](Self::compress), also reporting the final index size.
    pub fn compress_with_nodes(&self, data: &[u8]) -> Result<(TokenSequence, usize)> {
        let mut index = self.kind.build(data);
        let tokens = factorize(&mut index, data)?;
        Ok((tokens, index.node_count()))
    }
}
