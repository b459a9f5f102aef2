use crate::error::{Error, Result};

/// Bit-level reader over an in-memory bitstream
///
/// Bits are read from LSB to MSB within each byte, matching [`BitWriter`](super::BitWriter).
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Next byte to load into the buffer
    pos: usize,
    /// Buffer holding up to 64 bits
    buffer: u64,
    /// Number of valid bits in buffer (0-64)
    bits_available: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0, buffer: 0, bits_available: 0 }
    }

    /// Ensure at least `n` bits are available in buffer
    fn fill_buffer(&mut self, n: u8) -> Result<()> {
        debug_assert!(n <= 57, "Cannot request more than 57 bits at once");

        while self.bits_available <= 56 && self.pos < self.data.len() {
            self.buffer |= (self.data[self.pos] as u64) << self.bits_available;
            self.bits_available += 8;
            self.pos += 1;
        }

        if self.bits_available < n {
            return Err(Error::UnexpectedEof);
        }
        Ok(())
    }

    /// Read `n` bits (0-32) in LSB-first order
    pub fn read_bits(&mut self, n: u8) -> Result<u32> {
        debug_assert!(n <= 32, "Cannot read more than 32 bits at once");

        if n == 0 {
            return Ok(0);
        }

        if self.bits_available < n {
            self.fill_buffer(n)?;
        }

        let mask = (1u64 << n) - 1;
        let result = (self.buffer & mask) as u32;
        self.buffer >>= n;
        self.bits_available -= n;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bits() {
        // 0xD3 = 11010011, read LSB first
        let data = [0xD3, 0xAA];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(3).unwrap(), 0b011);
        assert_eq!(reader.read_bits(5).unwrap(), 0b11010);
        assert_eq!(reader.read_bits(8).unwrap(), 0xAA);
    }

    #[test]
    fn test_cross_byte_boundary() {
        let data = [0xFF, 0x00];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(12).unwrap(), 0x0FF);
    }

    #[test]
    fn test_eof() {
        let data = [0x01];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(8).unwrap(), 1);
        assert!(matches!(reader.read_bits(1), Err(Error::UnexpectedEof)));
    }
}
