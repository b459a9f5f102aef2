use crate::bits::BitWriter;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Maximum code length for the byte alphabet
pub const MAX_CODE_LENGTH: u8 = 15;

/// Count how often each byte value occurs
pub fn count_frequencies(data: &[u8]) -> [u64; 256] {
    let mut freq = [0u64; 256];
    for &byte in data {
        freq[byte as usize] += 1;
    }
    freq
}

/// Compute Huffman code lengths for `frequencies`, none longer than `max_bits`.
///
/// When the optimal code is too deep, all non-zero frequencies are halved
/// (keeping them non-zero) and the code is rebuilt. Returns 0 for unused symbols.
pub fn compute_code_lengths(frequencies: &[u64], max_bits: u8) -> Vec<u8> {
    let mut freqs = frequencies.to_vec();
    loop {
        let lengths = build_huffman_lengths(&freqs);
        if lengths.iter().all(|&len| len <= max_bits) {
            return lengths;
        }
        for f in freqs.iter_mut().filter(|f| **f > 0) {
            *f = (*f >> 1).max(1);
        }
    }
}

/// Build unrestricted Huffman code lengths
fn build_huffman_lengths(freqs: &[u64]) -> Vec<u8> {
    let mut lengths = vec![0u8; freqs.len()];
    let symbols: Vec<usize> = (0..freqs.len()).filter(|&sym| freqs[sym] > 0).collect();

    match symbols.len() {
        0 => return lengths,
        // A lone symbol still needs one bit per occurrence
        1 => {
            lengths[symbols[0]] = 1;
            return lengths;
        }
        _ => {}
    }

    // Nodes 0..symbols.len() are leaves; merged nodes are appended after them,
    // so every parent has a larger id than its children.
    let mut parent = vec![usize::MAX; symbols.len()];
    let mut heap: BinaryHeap<Reverse<(u64, usize)>> =
        symbols.iter().enumerate().map(|(id, &sym)| Reverse((freqs[sym], id))).collect();

    while let (Some(Reverse((f1, a))), Some(Reverse((f2, b)))) = (heap.pop(), heap.pop()) {
        let id = parent.len();
        parent.push(usize::MAX);
        parent[a] = id;
        parent[b] = id;
        heap.push(Reverse((f1 + f2, id)));
    }

    let mut depth = vec![0u8; parent.len()];
    for id in (0..parent.len()).rev() {
        if parent[id] != usize::MAX {
            depth[id] = depth[parent[id]] + 1;
        }
    }

    for (id, &sym) in symbols.iter().enumerate() {
        lengths[sym] = depth[id];
    }
    lengths
}

/// Assign canonical codes (shorter codes first, then by symbol value).
///
/// Returns `(code, length)` per symbol; unused symbols get `(0, 0)`.
pub fn canonical_codes(lengths: &[u8]) -> Vec<(u32, u8)> {
    let mut bl_count = [0u32; 16];
    for &len in lengths {
        if len > 0 {
            bl_count[len as usize] += 1;
        }
    }

    let mut next_code = [0u32; 16];
    let mut code = 0u32;
    for bits in 1..16 {
        code = (code + bl_count[bits - 1]) << 1;
        next_code[bits] = code;
    }

    lengths
        .iter()
        .map(|&len| {
            if len == 0 {
                (0, 0)
            } else {
                let code = next_code[len as usize];
                next_code[len as usize] += 1;
                (code, len)
            }
        })
        .collect()
}

/// Canonical Huffman encoder for bytes
pub struct HuffmanEncoder {
    lengths: Vec<u8>,
    codes: Vec<(u32, u8)>,
}

impl HuffmanEncoder {
    /// Build an encoder tuned to the byte distribution of `data`
    pub fn for_data(data: &[u8]) -> Self {
        let lengths = compute_code_lengths(&count_frequencies(data), MAX_CODE_LENGTH);
        Self::from_code_lengths(&lengths)
    }

    pub fn from_code_lengths(lengths: &[u8]) -> Self {
        let codes = canonical_codes(lengths);
        Self { lengths: lengths.to_vec(), codes }
    }

    /// Code length per byte value (0 = byte never occurs)
    pub fn code_lengths(&self) -> &[u8] {
        &self.lengths
    }

    /// Write the codes for every byte of `data`
    pub fn encode(&self, data: &[u8], writer: &mut BitWriter) {
        for &byte in data {
            let (code, len) = self.codes[byte as usize];
            debug_assert!(len > 0, "byte {byte} has no code");
            writer.write_code(code, len);
        }
    }

    /// Encoded size of `data` in bits
    pub fn encoded_bits(&self, data: &[u8]) -> u64 {
        data.iter().map(|&b| self.codes[b as usize].1 as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kraft_sum(lengths: &[u8]) -> f64 {
        lengths.iter().filter(|&&l| l > 0).map(|&l| 2f64.powi(-(l as i32))).sum()
    }

    #[test]
    fn test_empty_frequencies() {
        assert_eq!(compute_code_lengths(&[0, 0, 0], 15), vec![0, 0, 0]);
    }

    #[test]
    fn test_single_symbol() {
        assert_eq!(compute_code_lengths(&[0, 9, 0], 15), vec![0, 1, 0]);
    }

    #[test]
    fn test_skewed_frequencies() {
        let lengths = compute_code_lengths(&[50, 25, 15, 10], 15);
        assert_eq!(lengths, vec![1, 2, 3, 3]);
        assert_eq!(kraft_sum(&lengths), 1.0);
    }

    #[test]
    fn test_length_limit() {
        // Fibonacci frequencies give a maximally deep tree
        let mut freqs = vec![1u64, 1];
        while freqs.len() < 30 {
            let next = freqs[freqs.len() - 1] + freqs[freqs.len() - 2];
            freqs.push(next);
        }
        let unlimited = build_huffman_lengths(&freqs);
        assert!(unlimited.iter().any(|&l| l > 15));

        let lengths = compute_code_lengths(&freqs, 15);
        assert!(lengths.iter().all(|&l| (1..=15).contains(&l)));
        assert!(kraft_sum(&lengths) <= 1.0);
    }

    #[test]
    fn test_canonical_codes() {
        // RFC 1951 section 3.2.2 example
        let lengths = [3, 3, 3, 3, 3, 2, 4, 4];
        let codes = canonical_codes(&lengths);
        assert_eq!(
            codes,
            vec![
                (0b010, 3),
                (0b011, 3),
                (0b100, 3),
                (0b101, 3),
                (0b110, 3),
                (0b00, 2),
                (0b1110, 4),
                (0b1111, 4),
            ]
        );
    }

    #[test]
    fn test_encoded_bits() {
        let data = b"aaab";
        let encoder = HuffmanEncoder::for_data(data);
        assert_eq!(encoder.code_lengths()[b'a' as usize], 1);
        assert_eq!(encoder.code_lengths()[b'b' as usize], 1);
        assert_eq!(encoder.encoded_bits(data), 4);
    }
}
