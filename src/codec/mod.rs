//! Fixed-Width Field Codec
//!
//! Cursor-based packing and unpacking of scalar and text fields into a
//! caller-owned byte buffer. The cursor owns the write/read position, so a
//! packing sequence and its mirror unpacking sequence cannot drift apart.
//!
//! ## Field Widths
//! ```text
//! ┌───────────────┬───────────┬──────────────────────────────────────┐
//! │ Field         │ Bytes     │ Encoding                             │
//! ├───────────────┼───────────┼──────────────────────────────────────┤
//! │ u8 / i8       │ 1         │ two's complement                     │
//! │ u16 / i16     │ 2         │ big-endian, two's complement         │
//! │ u32 / i32     │ 4         │ big-endian, two's complement         │
//! │ u64 / i64     │ 8         │ big-endian, two's complement         │
//! │ f32 / f64     │ 4 / 8     │ IEEE 754 raw bit pattern, big-endian │
//! │ bool          │ 1         │ 1 = true, 0 = false                  │
//! │ text          │ 2 × width │ UTF-16 code units, big-endian,       │
//! │               │           │ zero-padded, silently truncated      │
//! └───────────────┴───────────┴──────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! The caller guarantees the buffer holds `position() + field width` bytes
//! before each operation. The codec performs no bounds checking of its own;
//! an undersized buffer fails with an out-of-range panic at the slice
//! access. Nothing outside the buffer and the cursor position is touched.

mod reader;
mod writer;

pub use reader::RecordReader;
pub use writer::RecordWriter;
