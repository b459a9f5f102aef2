//! Dictionary-based lossless compression by greedy longest-prior-match
//! factorization.
//!
//! Input bytes are split into literals and back-references to the longest
//! earlier occurrence of the upcoming bytes, found through a substring index
//! (an incremental trie or a linear-time suffix tree). The resulting tokens are
//! serialized as fixed-size records and can optionally be Huffman-coded.
//!
//! ```
//! use lzfactor::{compress_bytes, decompress_bytes, IndexKind};
//!
//! let data = b"tangananica-tanganana";
//! let compressed = compress_bytes(data, IndexKind::SuffixTree).unwrap();
//! assert_eq!(decompress_bytes(&compressed).unwrap(), data);
//! ```

pub mod bits;
pub mod codec;
pub mod compressor;
pub mod error;
pub mod huffman;
pub mod index;
pub mod lz;

pub use codec::{decode_tokens, encode_tokens, TokenReader, TokenWriter};
pub use compressor::{
    compress_bytes, decompress_bytes, CompressConfig, CompressStats, Compressor, DecompressStats,
};
pub use error::{Error, Result};
pub use index::{IndexKind, PriorMatch, SubstringIndex, SuffixTreeIndex, TrieIndex};
pub use lz::{factorize, reconstruct, Factorizer, Reconstructor, Token, TokenSequence};
