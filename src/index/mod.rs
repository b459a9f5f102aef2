//! Longest-prior-match indexes over a borrowed byte sequence.
//!
//! Both realizations answer the same question: for a scan position `pos`, what
//! is the longest substring starting at `pos` that also starts somewhere
//! strictly before `pos`? Ties on length resolve to the earliest origin.

pub mod suffix_tree;
pub mod trie;

pub use suffix_tree::SuffixTreeIndex;
pub use trie::TrieIndex;

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A back-reference candidate returned by [`SubstringIndex::longest_match`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriorMatch {
    /// Absolute position of the earlier occurrence (always below the query position)
    pub origin: usize,
    /// Number of matching bytes (always at least 1)
    pub length: usize,
}

/// Incrementally queried substring index over a sequence bound at construction.
pub trait SubstringIndex {
    /// Record that the suffix starting at `pos` may be referenced by later queries.
    ///
    /// Indexes that are built eagerly treat this as a range-checked no-op.
    fn insert(&mut self, pos: usize) -> Result<()>;

    /// Find the longest match for the bytes at `pos` whose origin lies before `pos`.
    ///
    /// Returns `Ok(None)` when no non-empty prior match exists.
    fn longest_match(&self, pos: usize) -> Result<Option<PriorMatch>>;

    /// Length of the indexed sequence
    fn len(&self) -> usize;

    /// Whether the indexed sequence is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes currently allocated, for statistics
    fn node_count(&self) -> usize;
}

impl<I: SubstringIndex + ?Sized> SubstringIndex for Box<I> {
    fn insert(&mut self, pos: usize) -> Result<()> {
        (**self).insert(pos)
    }

    fn longest_match(&self, pos: usize) -> Result<Option<PriorMatch>> {
        (**self).longest_match(pos)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }
}

/// Which index realization drives factorization
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IndexKind {
    /// Per-suffix trie, extended in lock-step with the factorizer
    Trie,
    /// Suffix tree built up front over the whole input
    #[default]
    SuffixTree,
}

impl IndexKind {
    /// Build an index of this kind over `data`.
    ///
    /// The suffix tree is complete on return; the trie starts empty.
    pub fn build(self, data: &[u8]) -> Box<dyn SubstringIndex + '_> {
        match self {
            Self::Trie => Box::new(TrieIndex::new(data)),
            Self::SuffixTree => Box::new(SuffixTreeIndex::build(data)),
        }
    }

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trie => "trie",
            Self::SuffixTree => "suffix-tree",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndexKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trie" => Ok(Self::Trie),
            "suffix-tree" | "suffix_tree" | "st" => Ok(Self::SuffixTree),
            _ => Err(Error::UnknownIndexKind(s.to_string())),
        }
    }
}

/// Shared range check for index operations
#[inline]
pub(crate) fn check_position(pos: usize, len: usize) -> Result<()> {
    if pos > len {
        return Err(Error::IndexQueryOutOfRange { pos, len });
    }
    Ok(())
}
