use super::encoder::MAX_CODE_LENGTH;
use crate::bits::BitReader;
use crate::error::{Error, Result};

/// Canonical Huffman decoder
pub struct HuffmanDecoder {
    /// Maximum code length
    max_bits: u8,
    /// For each bit length, the starting code and starting index
    /// (first_code, first_symbol_index)
    bit_info: Vec<(u32, usize)>,
    /// Symbols sorted by code length, then by symbol value
    symbols: Vec<u16>,
}

impl HuffmanDecoder {
    /// Build from per-symbol code lengths, rejecting codes that cannot be canonical
    pub fn from_code_lengths(lengths: &[u8]) -> Result<Self> {
        let max_bits = lengths.iter().copied().max().unwrap_or(0);
        if max_bits > MAX_CODE_LENGTH {
            return Err(Error::InvalidCodeLength(max_bits));
        }

        // Count codes of each length
        let mut bl_count = [0u32; 16];
        for &len in lengths {
            if len > 0 {
                bl_count[len as usize] += 1;
            }
        }

        // Kraft check: a lone one-bit code is the only incomplete code allowed
        let used: u32 = bl_count.iter().sum();
        let mut left: i64 = 1;
        for &count in &bl_count[1..] {
            left = (left << 1) - count as i64;
            if left < 0 {
                return Err(Error::HuffmanOversubscribed);
            }
        }
        if left > 0 && used > 1 {
            return Err(Error::HuffmanIncomplete);
        }

        // Compute first code for each bit length
        let mut next_code = [0u32; 16];
        let mut code = 0u32;
        for bits in 1..16 {
            code = (code + bl_count[bits - 1]) << 1;
            next_code[bits] = code;
        }

        // Sort symbols by code length, then by symbol value
        let mut symbols: Vec<(u16, u8)> = lengths
            .iter()
            .enumerate()
            .filter(|(_, &len)| len > 0)
            .map(|(sym, &len)| (sym as u16, len))
            .collect();
        symbols.sort_by_key(|&(sym, len)| (len, sym));

        let sorted_symbols: Vec<u16> = symbols.iter().map(|&(sym, _)| sym).collect();

        // Build bit_info: for each bit length, store (first_code, first_symbol_index)
        let mut bit_info = vec![(0u32, 0usize); 16];
        let mut symbol_idx = 0;
        for bits in 1..16 {
            bit_info[bits] = (next_code[bits], symbol_idx);
            symbol_idx += bl_count[bits] as usize;
        }

        Ok(Self { max_bits, bit_info, symbols: sorted_symbols })
    }

    /// Decode next symbol from bitstream
    pub fn decode(&self, bits: &mut BitReader<'_>) -> Result<u16> {
        if self.max_bits == 0 {
            return Err(Error::HuffmanIncomplete);
        }

        let mut code = 0u32;
        for len in 1..=self.max_bits {
            code = (code << 1) | bits.read_bits(1)?;
            let (first_code, first_idx) = self.bit_info[len as usize];

            // Check if this code is valid for this length
            let count = if len < 15 {
                self.bit_info[len as usize + 1].1 - first_idx
            } else {
                self.symbols.len() - first_idx
            };

            if count > 0 && code >= first_code && code < first_code + count as u32 {
                let idx = first_idx + (code - first_code) as usize;
                return Ok(self.symbols[idx]);
            }
        }

        Err(Error::InvalidHuffmanSymbol(code as u16))
    }

    /// Check if this decoder is empty (no symbols)
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
