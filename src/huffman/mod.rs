pub mod decoder;
pub mod encoder;
pub mod frame;

pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use frame::{decode_frame, encode_frame, is_entropy_frame};
