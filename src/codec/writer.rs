//! Record Writer
//!
//! Packs fields into a byte buffer at a self-advancing position.

/// Packs fixed-width fields into a borrowed buffer, front to back.
///
/// Every `put_*` call writes at the current position and advances it by the
/// field width. Multi-byte values are big-endian.
pub struct RecordWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> RecordWriter<'a> {
    /// Start packing at the beginning of `buf`
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left in the buffer
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Internal: copy raw bytes at the cursor and advance
    fn put_bytes(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    // =========================================================================
    // Integers
    // =========================================================================

    /// Pack an unsigned byte (1 byte)
    pub fn put_u8(&mut self, value: u8) {
        self.put_bytes(&[value]);
    }

    /// Pack a signed byte (1 byte)
    pub fn put_i8(&mut self, value: i8) {
        self.put_bytes(&value.to_be_bytes());
    }

    /// Pack an unsigned 16-bit integer (2 bytes)
    pub fn put_u16(&mut self, value: u16) {
        self.put_bytes(&value.to_be_bytes());
    }

    /// Pack a signed 16-bit integer (2 bytes)
    pub fn put_i16(&mut self, value: i16) {
        self.put_bytes(&value.to_be_bytes());
    }

    /// Pack an unsigned 32-bit integer (4 bytes)
    pub fn put_u32(&mut self, value: u32) {
        self.put_bytes(&value.to_be_bytes());
    }

    /// Pack a signed 32-bit integer (4 bytes)
    pub fn put_i32(&mut self, value: i32) {
        self.put_bytes(&value.to_be_bytes());
    }

    /// Pack an unsigned 64-bit integer (8 bytes)
    pub fn put_u64(&mut self, value: u64) {
        self.put_bytes(&value.to_be_bytes());
    }

    /// Pack a signed 64-bit integer (8 bytes)
    pub fn put_i64(&mut self, value: i64) {
        self.put_bytes(&value.to_be_bytes());
    }

    // =========================================================================
    // Floats (raw IEEE 754 bit pattern)
    // =========================================================================

    /// Pack a 32-bit float via its raw bit pattern (4 bytes)
    pub fn put_f32(&mut self, value: f32) {
        self.put_u32(value.to_bits());
    }

    /// Pack a 64-bit float via its raw bit pattern (8 bytes)
    pub fn put_f64(&mut self, value: f64) {
        self.put_u64(value.to_bits());
    }

    // =========================================================================
    // Other field types
    // =========================================================================

    /// Pack a boolean as a single byte, `1` for true and `0` for false
    pub fn put_bool(&mut self, value: bool) {
        self.put_u8(value as u8);
    }

    /// Pack a string as exactly `width` UTF-16 code units (2 bytes each).
    ///
    /// Units beyond `width` are dropped: oversized input is silently
    /// truncated, never rejected. Unused trailing units are zero-filled.
    pub fn put_str(&mut self, value: &str, width: usize) {
        let mut written = 0;
        for unit in value.encode_utf16().take(width) {
            self.put_u16(unit);
            written += 1;
        }
        for _ in written..width {
            self.put_u16(0);
        }
    }
}
