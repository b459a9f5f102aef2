/// Bit-level writer for the entropy stage
///
/// Writes bits LSB-first within each byte.
pub struct BitWriter {
    /// Accumulated output bytes
    output: Vec<u8>,
    /// Pending bits not yet flushed to `output`
    buffer: u64,
    /// Number of valid bits in `buffer` (0-63)
    bits_in_buffer: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity), buffer: 0, bits_in_buffer: 0 }
    }

    /// Write `n` bits (0-32) from value in LSB-first order
    pub fn write_bits(&mut self, value: u32, n: u8) {
        debug_assert!(n <= 32);
        if n == 0 {
            return;
        }

        let mask = if n == 32 { u32::MAX } else { (1u32 << n) - 1 };
        self.buffer |= ((value & mask) as u64) << self.bits_in_buffer;
        self.bits_in_buffer += n;

        while self.bits_in_buffer >= 8 {
            self.output.push(self.buffer as u8);
            self.buffer >>= 8;
            self.bits_in_buffer -= 8;
        }
    }

    /// Write a Huffman code of `length` bits, most significant bit first
    pub fn write_code(&mut self, code: u32, length: u8) {
        self.write_bits(reverse_bits(code, length), length);
    }

    /// Pad to byte boundary with zero bits and return the output bytes
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            self.output.push(self.buffer as u8);
        }
        self.output
    }

    /// Current output length in bytes (including partial byte)
    pub fn len(&self) -> usize {
        self.output.len() + (self.bits_in_buffer as usize).div_ceil(8)
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty() && self.bits_in_buffer == 0
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reverse the bottom `n` bits of `value`
pub(crate) fn reverse_bits(value: u32, n: u8) -> u32 {
    let mut result = 0u32;
    let mut v = value;
    for _ in 0..n {
        result = (result << 1) | (v & 1);
        v >>= 1;
    }
    result
}
