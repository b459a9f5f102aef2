//! Self-describing container for a Huffman-coded byte payload.
//!
//! Layout (all integers little-endian):
//!
//! | bytes | field                                            |
//! |-------|--------------------------------------------------|
//! | 4     | magic `LZFH`                                     |
//! | 128   | 256 code lengths, two per byte, even symbol low  |
//! | 8     | payload length in bytes                          |
//! | 4     | CRC32 of the payload                             |
//! | ...   | LSB-first bitstream, zero padded to a byte       |

use super::decoder::HuffmanDecoder;
use super::encoder::HuffmanEncoder;
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};

/// Frame magic bytes
pub const FRAME_MAGIC: [u8; 4] = *b"LZFH";

/// Packed code length table size
const LENGTHS_SIZE: usize = 128;

/// Size of everything before the bitstream
pub const FRAME_HEADER_SIZE: usize = FRAME_MAGIC.len() + LENGTHS_SIZE + 8 + 4;

/// Quick check for the frame magic
pub fn is_entropy_frame(bytes: &[u8]) -> bool {
    bytes.len() >= FRAME_MAGIC.len() && bytes[..FRAME_MAGIC.len()] == FRAME_MAGIC
}

/// Huffman-code `payload` into a new frame
pub fn encode_frame(payload: &[u8]) -> Vec<u8> {
    let encoder = HuffmanEncoder::for_data(payload);
    let bits = encoder.encoded_bits(payload);

    let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + bits.div_ceil(8) as usize);
    frame.extend_from_slice(&FRAME_MAGIC);
    frame.extend(encoder.code_lengths().chunks(2).map(|pair| pair[0] | (pair[1] << 4)));
    frame.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    frame.extend_from_slice(&crc32fast::hash(payload).to_le_bytes());

    let mut writer = BitWriter::with_capacity(bits.div_ceil(8) as usize);
    encoder.encode(payload, &mut writer);
    frame.extend_from_slice(&writer.finish());
    frame
}

/// Decode a frame produced by [`encode_frame`], verifying its checksum
pub fn decode_frame(frame: &[u8]) -> Result<Vec<u8>> {
    if frame.len() < FRAME_HEADER_SIZE {
        if !FRAME_MAGIC.starts_with(&frame[..frame.len().min(FRAME_MAGIC.len())]) {
            return Err(Error::InvalidFrameMagic(padded_magic(frame)));
        }
        return Err(Error::UnexpectedEof);
    }
    if !is_entropy_frame(frame) {
        return Err(Error::InvalidFrameMagic(padded_magic(frame)));
    }

    let (header, stream) = frame.split_at(FRAME_HEADER_SIZE);
    let packed = &header[FRAME_MAGIC.len()..FRAME_MAGIC.len() + LENGTHS_SIZE];
    let lengths: Vec<u8> = packed.iter().flat_map(|&b| [b & 0x0F, b >> 4]).collect();

    let mut len_bytes = [0u8; 8];
    len_bytes.copy_from_slice(&header[FRAME_MAGIC.len() + LENGTHS_SIZE..FRAME_HEADER_SIZE - 4]);
    let payload_len = u64::from_le_bytes(len_bytes);
    let mut crc_bytes = [0u8; 4];
    crc_bytes.copy_from_slice(&header[FRAME_HEADER_SIZE - 4..]);
    let expected_crc = u32::from_le_bytes(crc_bytes);

    // Every symbol costs at least one bit
    if payload_len > stream.len() as u64 * 8 {
        return Err(Error::UnexpectedEof);
    }

    let decoder = HuffmanDecoder::from_code_lengths(&lengths)?;
    let mut reader = BitReader::new(stream);
    let mut payload = Vec::with_capacity(payload_len as usize);
    for _ in 0..payload_len {
        payload.push(decoder.decode(&mut reader)? as u8);
    }

    let found = crc32fast::hash(&payload);
    if found != expected_crc {
        return Err(Error::Crc32Mismatch { expected: expected_crc, found });
    }
    Ok(payload)
}

fn padded_magic(frame: &[u8]) -> [u8; 4] {
    let mut magic = [0u8; 4];
    let n = frame.len().min(4);
    magic[..n].copy_from_slice(&frame[..n]);
    magic
}
