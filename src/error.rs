use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Index errors
    #[error("Index query at position {pos} is beyond the indexed length {len}")]
    IndexQueryOutOfRange { pos: usize, len: usize },

    #[error("Unknown index kind {0:?} (expected \"trie\" or \"suffix-tree\")")]
    UnknownIndexKind(String),

    // Token errors
    #[error("Match offset {offset} references beyond the {available} bytes reconstructed so far")]
    DanglingMatchReference { offset: usize, available: usize },

    #[error("Match of length {length} would grow the output beyond addressable memory")]
    OutputTooLarge { length: usize },

    #[error("Match at offset {offset} has zero length and cannot be encoded")]
    ZeroLengthMatch { offset: usize },

    #[error("Token field value {value} does not fit in a 32-bit record field")]
    FieldOverflow { value: usize },

    // Entropy frame errors
    #[error("Invalid entropy frame magic: expected \"LZFH\", got {0:02x?}")]
    InvalidFrameMagic([u8; 4]),

    #[error("Invalid Huffman code length: {0} (max 15)")]
    InvalidCodeLength(u8),

    #[error("Huffman code oversubscribed: more codes than possible for bit length")]
    HuffmanOversubscribed,

    #[error("Huffman code incomplete: not all codes assigned")]
    HuffmanIncomplete,

    #[error("Invalid Huffman symbol: {0}")]
    InvalidHuffmanSymbol(u16),

    // Checksum errors
    #[error("CRC32 mismatch: expected 0x{expected:08x}, got 0x{found:08x}")]
    Crc32Mismatch { expected: u32, found: u32 },

    // Internal errors
    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
