/// Represents a single token in the factorized stream
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A literal byte
    Literal(u8),
    /// A back-reference: copy `length` bytes starting at absolute position `offset`
    Match { offset: usize, length: usize },
}

impl Token {
    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => *length,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }
}

/// Ordered tokens whose replay reproduces the original input
pub type TokenSequence = Vec<Token>;

/// Counts gathered over a token sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FactorizationSummary {
    pub literals: u64,
    pub matches: u64,
    /// Longest single match length (0 if there are no matches)
    pub longest_match: usize,
    /// Total bytes the sequence expands to
    pub uncompressed_size: u64,
}

impl FactorizationSummary {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut summary = Self::default();
        for token in tokens {
            match token {
                Token::Literal(_) => summary.literals += 1,
                Token::Match { length, .. } => {
                    summary.matches += 1;
                    summary.longest_match = summary.longest_match.max(*length);
                }
            }
            summary.uncompressed_size += token.uncompressed_size() as u64;
        }
        summary
    }

    /// Total number of tokens
    pub fn tokens(&self) -> u64 {
        self.literals + self.matches
    }
}
