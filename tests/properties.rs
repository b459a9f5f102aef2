//! Property-based tests for factorization, reconstruction and the codecs.

use lzfactor::huffman::{decode_frame, encode_frame};
use lzfactor::{
    compress_bytes, decode_tokens, decompress_bytes, encode_tokens, reconstruct, Factorizer,
    IndexKind, SubstringIndex, SuffixTreeIndex, Token, TrieIndex,
};
use proptest::prelude::*;
use proptest::sample::Index;

/// Longest prefix of `data[pos..]` occurring at an earlier start, earliest start on ties
fn brute_force_longest(data: &[u8], pos: usize) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for origin in 0..pos {
        let length = data[origin..].iter().zip(&data[pos..]).take_while(|(a, b)| a == b).count();
        if length > 0 && best.map_or(true, |(_, l)| length > l) {
            best = Some((origin, length));
        }
    }
    best
}

/// Bytes drawn from a small alphabet so that repeats are common
fn repetitive_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(b'a'..=b'd', 0..max_len)
}

fn token() -> impl Strategy<Value = Token> {
    prop_oneof![
        any::<u8>().prop_map(Token::Literal),
        (any::<u32>(), 1..=u32::MAX).prop_map(|(offset, length)| Token::Match {
            offset: offset as usize,
            length: length as usize,
        }),
    ]
}

proptest! {
    /// Decompressing a compressed input restores it exactly.
    #[test]
    fn prop_roundtrip(input in repetitive_bytes(400)) {
        for kind in [IndexKind::Trie, IndexKind::SuffixTree] {
            let compressed = compress_bytes(&input, kind).unwrap();
            prop_assert_eq!(decompress_bytes(&compressed).unwrap(), input.clone());
        }
    }

    /// Arbitrary bytes survive the round trip too.
    #[test]
    fn prop_roundtrip_any_bytes(input: Vec<u8>) {
        let compressed = compress_bytes(&input, IndexKind::SuffixTree).unwrap();
        prop_assert_eq!(decompress_bytes(&compressed).unwrap(), input);
    }

    /// A trie holding every suffix below `pos` answers exactly like the suffix tree.
    #[test]
    fn prop_indexes_agree(input in repetitive_bytes(200)) {
        let mut trie = TrieIndex::new(&input);
        let tree = SuffixTreeIndex::build(&input);
        for pos in 0..=input.len() {
            prop_assert_eq!(trie.longest_match(pos).unwrap(), tree.longest_match(pos).unwrap());
            if pos < input.len() {
                trie.insert(pos).unwrap();
            }
        }
    }

    /// Every match starts before the position it is emitted at and covers at least one byte.
    #[test]
    fn prop_causality(input in repetitive_bytes(500)) {
        let tokens = Factorizer::default().compress(&input).unwrap();
        let mut pos = 0;
        for token in &tokens {
            if let Token::Match { offset, length } = *token {
                prop_assert!(offset < pos);
                prop_assert!(length >= 1);
                prop_assert!(pos + length <= input.len());
            }
            pos += token.uncompressed_size();
        }
        prop_assert_eq!(pos, input.len());
    }

    /// Each step takes the longest earlier match, and a literal only when none exists.
    #[test]
    fn prop_greedy_longest(input in repetitive_bytes(200)) {
        let tokens = Factorizer::new(IndexKind::SuffixTree).compress(&input).unwrap();
        let mut pos = 0;
        for token in &tokens {
            let expected = brute_force_longest(&input, pos);
            match *token {
                Token::Literal(byte) => {
                    prop_assert_eq!(byte, input[pos]);
                    prop_assert_eq!(expected, None);
                }
                Token::Match { offset, length } => {
                    prop_assert_eq!(Some((offset, length)), expected);
                }
            }
            pos += token.uncompressed_size();
        }
    }

    /// Suffix tree queries agree with a brute-force scan at every position.
    #[test]
    fn prop_suffix_tree_queries(input in repetitive_bytes(150)) {
        let index = SuffixTreeIndex::build(&input);
        for pos in 0..=input.len() {
            let found = index.longest_match(pos).unwrap().map(|m| (m.origin, m.length));
            prop_assert_eq!(found, brute_force_longest(&input, pos));
        }
    }

    /// Token records decode to the tokens that were encoded.
    #[test]
    fn prop_codec_roundtrip(tokens in prop::collection::vec(token(), 0..64)) {
        let bytes = encode_tokens(&tokens).unwrap();
        prop_assert_eq!(decode_tokens(&bytes).unwrap(), tokens);
    }

    /// Cutting a stream anywhere loses only the records that were cut.
    #[test]
    fn prop_truncation_tolerance(input in repetitive_bytes(300), cut in any::<Index>()) {
        let compressed = compress_bytes(&input, IndexKind::SuffixTree).unwrap();
        let keep = cut.index(compressed.len() + 1);

        let restored = reconstruct(&decode_tokens(&compressed[..keep]).unwrap()).unwrap();
        prop_assert!(input.starts_with(&restored));
    }

    /// The entropy frame restores its payload.
    #[test]
    fn prop_entropy_roundtrip(payload: Vec<u8>) {
        prop_assert_eq!(decode_frame(&encode_frame(&payload)).unwrap(), payload);
    }
}
