//! Record Reader
//!
//! Unpacks fields from a byte buffer at a self-advancing position.

/// Unpacks fixed-width fields from a borrowed buffer, front to back.
///
/// Every `get_*` call reads at the current position and advances it by the
/// field width, mirroring [`RecordWriter`](super::RecordWriter) exactly.
pub struct RecordReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> RecordReader<'a> {
    /// Start unpacking at the beginning of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left in the buffer
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Internal: take exactly `n` raw bytes at the cursor and advance
    fn take(&mut self, n: usize) -> &'a [u8] {
        let start = self.pos;
        self.pos += n;
        &self.buf[start..self.pos]
    }

    // =========================================================================
    // Integers
    // =========================================================================

    /// Unpack an unsigned byte (1 byte)
    pub fn get_u8(&mut self) -> u8 {
        self.take(1)[0]
    }

    /// Unpack a signed byte (1 byte)
    pub fn get_i8(&mut self) -> i8 {
        i8::from_be_bytes(self.take(1).try_into().unwrap())
    }

    /// Unpack an unsigned 16-bit integer (2 bytes)
    pub fn get_u16(&mut self) -> u16 {
        u16::from_be_bytes(self.take(2).try_into().unwrap())
    }

    /// Unpack a signed 16-bit integer (2 bytes)
    pub fn get_i16(&mut self) -> i16 {
        i16::from_be_bytes(self.take(2).try_into().unwrap())
    }

    /// Unpack an unsigned 32-bit integer (4 bytes)
    pub fn get_u32(&mut self) -> u32 {
        u32::from_be_bytes(self.take(4).try_into().unwrap())
    }

    /// Unpack a signed 32-bit integer (4 bytes)
    pub fn get_i32(&mut self) -> i32 {
        i32::from_be_bytes(self.take(4).try_into().unwrap())
    }

    /// Unpack an unsigned 64-bit integer (8 bytes)
    pub fn get_u64(&mut self) -> u64 {
        u64::from_be_bytes(self.take(8).try_into().unwrap())
    }

    /// Unpack a signed 64-bit integer (8 bytes)
    pub fn get_i64(&mut self) -> i64 {
        i64::from_be_bytes(self.take(8).try_into().unwrap())
    }

    // =========================================================================
    // Floats (raw IEEE 754 bit pattern)
    // =========================================================================

    /// Unpack a 32-bit float from its raw bit pattern (4 bytes)
    pub fn get_f32(&mut self) -> f32 {
        f32::from_bits(self.get_u32())
    }

    /// Unpack a 64-bit float from its raw bit pattern (8 bytes)
    pub fn get_f64(&mut self) -> f64 {
        f64::from_bits(self.get_u64())
    }

    // =========================================================================
    // Other field types
    // =========================================================================

    /// Unpack a boolean from a single byte; any nonzero byte reads as true
    pub fn get_bool(&mut self) -> bool {
        self.get_u8() != 0
    }

    /// Unpack a string from exactly `width` UTF-16 code units.
    ///
    /// The cursor always advances the full `2 * width` bytes; the decoded
    /// text stops at the first zero unit, so zero padding never leaks into
    /// the result. Invalid UTF-16 (e.g. a lone surrogate left by mid-pair
    /// truncation) decodes lossily.
    pub fn get_str(&mut self, width: usize) -> String {
        let mut units = Vec::with_capacity(width);
        for _ in 0..width {
            units.push(self.get_u16());
        }
        let end = units.iter().position(|&unit| unit == 0).unwrap_or(width);
        String::from_utf16_lossy(&units[..end])
    }
}
