//! Implicit suffix tree built online (Ukkonen's construction).
//!
//! The tree is built once over the whole input and then queried read-only.
//! Edges are `[start, end)` ranges into the borrowed input; leaves keep an
//! open end that the builder advances as each byte is consumed, so every
//! leaf grows by one byte per phase for free.

use super::{check_position, PriorMatch, SubstringIndex};
use crate::error::Result;
use ahash::AHashMap as HashMap;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug)]
struct Node {
    /// First byte of the edge leading into this node
    start: usize,
    /// Exclusive end of that edge; `None` for leaves, which run to the current end
    end: Option<usize>,
    suffix_link: NodeId,
    children: HashMap<u8, NodeId>,
    /// Smallest suffix start among the leaves below (or at) this node
    min_suffix: usize,
}

impl Node {
    fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end, suffix_link: ROOT, children: HashMap::new(), min_suffix: usize::MAX }
    }
}

/// Where the builder is in the middle of inserting pending suffixes.
#[derive(Debug, Clone, Copy)]
struct ActivePoint {
    node: NodeId,
    /// Input position of the first byte of the active edge
    edge: usize,
    length: usize,
}

/// Construction state. Lives only for the duration of [`SuffixTreeIndex::build`].
struct Builder<'a> {
    data: &'a [u8],
    nodes: Vec<Node>,
    active: ActivePoint,
    /// Suffixes that still have to be made explicit
    remaining: usize,
    /// Shared end of every open leaf edge
    leaf_end: usize,
}

impl<'a> Builder<'a> {
    fn new(data: &'a [u8]) -> Self {
        let mut nodes = Vec::with_capacity(2 * data.len() + 1);
        nodes.push(Node::new(0, Some(0)));
        Self {
            data,
            nodes,
            active: ActivePoint { node: ROOT, edge: 0, length: 0 },
            remaining: 0,
            leaf_end: 0,
        }
    }

    fn edge_len(&self, id: NodeId) -> usize {
        let node = &self.nodes[id];
        node.end.unwrap_or(self.leaf_end) - node.start
    }

    fn new_node(&mut self, start: usize, end: Option<usize>) -> NodeId {
        self.nodes.push(Node::new(start, end));
        self.nodes.len() - 1
    }

    /// Add `data[pos]` to every suffix currently in the tree.
    fn extend(&mut self, pos: usize) {
        let byte = self.data[pos];
        self.leaf_end = pos + 1;
        self.remaining += 1;
        let mut pending_link: Option<NodeId> = None;

        while self.remaining > 0 {
            if self.active.length == 0 {
                self.active.edge = pos;
            }
            let edge_byte = self.data[self.active.edge];

            match self.nodes[self.active.node].children.get(&edge_byte).copied() {
                None => {
                    let leaf = self.new_node(pos, None);
                    self.nodes[self.active.node].children.insert(edge_byte, leaf);
                    if let Some(node) = pending_link.take() {
                        self.nodes[node].suffix_link = self.active.node;
                    }
                }
                Some(next) => {
                    let edge_len = self.edge_len(next);
                    if self.active.length >= edge_len {
                        // Skip/count down to the next node and retry there
                        self.active.edge += edge_len;
                        self.active.length -= edge_len;
                        self.active.node = next;
                        continue;
                    }

                    let next_start = self.nodes[next].start;
                    if self.data[next_start + self.active.length] == byte {
                        // Already present: this suffix and all shorter ones stay implicit
                        if let Some(node) = pending_link.take() {
                            self.nodes[node].suffix_link = self.active.node;
                        }
                        self.active.length += 1;
                        break;
                    }

                    let split = self.new_node(next_start, Some(next_start + self.active.length));
                    self.nodes[self.active.node].children.insert(edge_byte, split);

                    let leaf = self.new_node(pos, None);
                    self.nodes[split].children.insert(byte, leaf);

                    self.nodes[next].start += self.active.length;
                    let next_byte = self.data[self.nodes[next].start];
                    self.nodes[split].children.insert(next_byte, next);

                    if let Some(node) = pending_link.replace(split) {
                        self.nodes[node].suffix_link = split;
                    }
                }
            }

            self.remaining -= 1;
            if self.active.node == ROOT && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = pos + 1 - self.remaining;
            } else if self.active.node != ROOT {
                self.active.node = self.nodes[self.active.node].suffix_link;
            }
        }
    }

    /// Record the earliest suffix start below every node.
    fn finish(mut self) -> Vec<Node> {
        let n = self.data.len();
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(ROOT, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            order.push(id);
            if id != ROOT && self.nodes[id].children.is_empty() {
                self.nodes[id].min_suffix = n - depth;
            }
            for &child in self.nodes[id].children.values() {
                stack.push((child, depth + self.edge_len(child)));
            }
        }

        for &id in order.iter().rev() {
            let min_child =
                self.nodes[id].children.values().map(|&child| self.nodes[child].min_suffix).min();
            if let Some(min) = min_child {
                self.nodes[id].min_suffix = min;
            }
        }

        self.nodes
    }
}

/// Suffix tree over a borrowed byte sequence.
#[derive(Debug)]
pub struct SuffixTreeIndex<'a> {
    data: &'a [u8],
    nodes: Vec<Node>,
}

impl<'a> SuffixTreeIndex<'a> {
    /// Build the complete tree over `data` in amortized linear time.
    pub fn build(data: &'a [u8]) -> Self {
        let mut builder = Builder::new(data);
        for pos in 0..data.len() {
            builder.extend(pos);
        }
        Self { data, nodes: builder.finish() }
    }

    fn edge_end(&self, id: NodeId) -> usize {
        self.nodes[id].end.unwrap_or(self.data.len())
    }
}

impl SubstringIndex for SuffixTreeIndex<'_> {
    fn insert(&mut self, pos: usize) -> Result<()> {
        check_position(pos, self.data.len())
    }

    fn longest_match(&self, pos: usize) -> Result<Option<PriorMatch>> {
        let n = self.data.len();
        check_position(pos, n)?;

        let mut best = None;
        let mut node = ROOT;
        let mut matched = 0;

        while pos + matched < n {
            let Some(&child) = self.nodes[node].children.get(&self.data[pos + matched]) else {
                break;
            };
            // Every leaf below `child` shares at least the bytes walked so far;
            // the earliest of them is the only candidate worth reporting.
            let origin = self.nodes[child].min_suffix;
            if origin >= pos {
                break;
            }

            let start = self.nodes[child].start;
            let edge = &self.data[start..self.edge_end(child)];
            let agree =
                edge.iter().zip(&self.data[pos + matched..]).take_while(|(a, b)| a == b).count();
            matched += agree;
            best = Some(PriorMatch { origin, length: matched });

            if agree < edge.len() {
                break;
            }
            node = child;
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
