use super::{check_position, PriorMatch, SubstringIndex};
use crate::error::Result;
use ahash::AHashMap as HashMap;

type NodeId = usize;

const ROOT: NodeId = 0;

/// One node per distinct byte path through the inserted suffixes.
#[derive(Debug)]
struct TrieNode {
    children: HashMap<u8, NodeId>,
    /// Start of the first inserted suffix that reached this node
    first_position: usize,
}

impl TrieNode {
    fn new(first_position: usize) -> Self {
        Self { children: HashMap::new(), first_position }
    }
}

/// Uncompressed suffix trie, extended one suffix at a time.
///
/// Inserting the suffix at `pos` walks (and extends) one node per remaining
/// byte of the input, so total work and memory are quadratic for inputs with
/// little repetition. Nodes live in an arena addressed by index.
#[derive(Debug)]
pub struct TrieIndex<'a> {
    data: &'a [u8],
    nodes: Vec<TrieNode>,
}

impl<'a> TrieIndex<'a> {
    /// Create an empty trie over `data`.
    ///
    /// Nothing is indexed until [`insert`](SubstringIndex::insert) is called.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, nodes: vec![TrieNode::new(usize::MAX)] }
    }
}

impl SubstringIndex for TrieIndex<'_> {
    fn insert(&mut self, pos: usize) -> Result<()> {
        check_position(pos, self.data.len())?;

        let mut node = ROOT;
        for &byte in &self.data[pos..] {
            node = match self.nodes[node].children.get(&byte) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new(pos));
                    self.nodes[node].children.insert(byte, child);
                    child
                }
            };
        }
        Ok(())
    }

    fn longest_match(&self, pos: usize) -> Result<Option<PriorMatch>> {
        check_position(pos, self.data.len())?;

        let mut best = None;
        let mut node = ROOT;
        for (depth, byte) in self.data[pos..].iter().enumerate() {
            let Some(&child) = self.nodes[node].children.get(byte) else {
                break;
            };
            node = child;

            let first = self.nodes[node].first_position;
            if first < pos {
                best = Some(PriorMatch { origin: first, length: depth + 1 });
            }
        }
        Ok(best)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_trie_has_no_matches() {
        let trie = TrieIndex::new(b"abcabc");
        for pos in 0..=6 {
            assert_eq!(trie.longest_match(pos).unwrap(), None);
        }
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_insert_creates_one_node_per_byte() {
        let mut trie = TrieIndex::new(b"abcd");
        trie.insert(0).unwrap();
        assert_eq!(trie.node_count(), 5);

        // "bcd" shares no prefix with "abcd"
        trie.insert(1).unwrap();
        assert_eq!(trie.node_count(), 8);
    }

    #[test]
    fn test_first_position_is_kept() {
        let data = b"abab";
        let mut trie = TrieIndex::new(data);
        trie.insert(0).unwrap();
        trie.insert(2).unwrap();
        // Both suffixes share "ab"; the node keeps the earlier start
        let node_a = trie.nodes[ROOT].children[&b'a'];
        assert_eq!(trie.nodes[node_a].first_position, 0);
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_self_overlapping_match() {
        let data = b"aaaaaa";
        let mut trie = TrieIndex::new(data);
        trie.insert(0).unwrap();
        assert_eq!(trie.longest_match(1).unwrap(), Some(PriorMatch { origin: 0, length: 5 }));
    }

    #[test]
    fn test_only_inserted_suffixes_are_matched() {
        let data = b"xabyab";
        let mut trie = TrieIndex::new(data);
        trie.insert(0).unwrap();
        // "ab" at 1 has not been inserted
        assert_eq!(trie.longest_match(4).unwrap(), None);

        trie.insert(1).unwrap();
        assert_eq!(trie.longest_match(4).unwrap(), Some(PriorMatch { origin: 1, length: 2 }));
    }

    #[test]
    fn test_forward_origin_rejected() {
        let data = b"abab";
        let mut trie = TrieIndex::new(data);
        trie.insert(2).unwrap();
        // The only indexed occurrence of "ab" starts after position 0
        assert_eq!(trie.longest_match(0).unwrap(), None);
    }

    #[test]
    fn test_insert_at_end_is_noop() {
        let mut trie = TrieIndex::new(b"ab");
        trie.insert(2).unwrap();
        assert_eq!(trie.node_count(), 1);
        assert!(matches!(trie.insert(3), Err(Error::IndexQueryOutOfRange { pos: 3, len: 2 })));
    }
}
