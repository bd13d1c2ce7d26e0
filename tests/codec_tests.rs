//! Tests for the fixed-width record codec
//!
//! These tests verify:
//! - Scalar round-trips for every integer width, floats, and bools
//! - Big-endian byte order on the wire
//! - UTF-16 string fields: two bytes per unit, truncation, zero padding
//! - Decoding stops at the first zero unit
//! - Cursor position and remaining-byte accounting
//! - Out-of-range access panics instead of corrupting neighbors

use shelfdb::codec::{RecordReader, RecordWriter};

// =============================================================================
// Scalar Round-Trips
// =============================================================================

#[test]
fn test_u8_i8_round_trip() {
    let mut buf = [0u8; 4];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_u8(0xAB);
    writer.put_i8(-5);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_u8(), 0xAB);
    assert_eq!(reader.get_i8(), -5);
}

#[test]
fn test_u16_i16_round_trip() {
    let mut buf = [0u8; 8];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_u16(0xBEEF);
    writer.put_i16(-1234);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_u16(), 0xBEEF);
    assert_eq!(reader.get_i16(), -1234);
}

#[test]
fn test_u32_i32_round_trip() {
    let mut buf = [0u8; 8];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_u32(0xDEAD_BEEF);
    writer.put_i32(i32::MIN);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_u32(), 0xDEAD_BEEF);
    assert_eq!(reader.get_i32(), i32::MIN);
}

#[test]
fn test_u64_i64_round_trip() {
    let mut buf = [0u8; 16];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_u64(u64::MAX - 1);
    writer.put_i64(i64::MIN);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_u64(), u64::MAX - 1);
    assert_eq!(reader.get_i64(), i64::MIN);
}

#[test]
fn test_f32_f64_round_trip() {
    let mut buf = [0u8; 12];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_f32(-1.5);
    writer.put_f64(std::f64::consts::PI);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_f32(), -1.5);
    assert_eq!(reader.get_f64(), std::f64::consts::PI);
}

#[test]
fn test_float_bit_patterns_preserved() {
    let mut buf = [0u8; 12];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_f32(f32::NAN);
    writer.put_f64(-0.0);

    let mut reader = RecordReader::new(&buf);
    // NaN != NaN, so compare the raw bits
    assert_eq!(reader.get_f32().to_bits(), f32::NAN.to_bits());
    assert_eq!(reader.get_f64().to_bits(), (-0.0f64).to_bits());
}

#[test]
fn test_big_endian_byte_order() {
    let mut buf = [0u8; 6];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_u16(0x1234);
    writer.put_u32(0xDEAD_BEEF);

    assert_eq!(buf, [0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF]);
}

// =============================================================================
// Booleans
// =============================================================================

#[test]
fn test_bool_round_trip() {
    let mut buf = [0u8; 2];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_bool(true);
    writer.put_bool(false);

    assert_eq!(buf, [1, 0]);

    let mut reader = RecordReader::new(&buf);
    assert!(reader.get_bool());
    assert!(!reader.get_bool());
}

#[test]
fn test_bool_decodes_any_nonzero_as_true() {
    let buf = [0xFFu8, 0x02, 0x00];
    let mut reader = RecordReader::new(&buf);
    assert!(reader.get_bool());
    assert!(reader.get_bool());
    assert!(!reader.get_bool());
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn test_string_round_trip() {
    let mut buf = [0u8; 32];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_str("hello", 16);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_str(16), "hello");
}

#[test]
fn test_string_occupies_two_bytes_per_unit() {
    let mut buf = [0u8; 8];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_str("AB", 4);

    // 'A' = 0x0041, 'B' = 0x0042, then zero padding
    assert_eq!(buf, [0x00, 0x41, 0x00, 0x42, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn test_string_truncated_to_width() {
    let mut buf = [0u8; 6];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_str("abcdef", 3);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_str(3), "abc");
}

#[test]
fn test_string_decode_stops_at_first_zero() {
    // "Hi" followed by a zero unit, then a stray 'X' that must be ignored
    let buf = [0x00, 0x48, 0x00, 0x69, 0x00, 0x00, 0x00, 0x58];
    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_str(4), "Hi");
    // Cursor still advances over the full field width
    assert_eq!(reader.position(), 8);
}

#[test]
fn test_empty_string_round_trip() {
    let mut buf = [0xFFu8; 8];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_str("", 4);

    assert_eq!(buf, [0u8; 8]);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_str(4), "");
}

#[test]
fn test_string_non_ascii_bmp() {
    let mut buf = [0u8; 20];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_str("café 日本", 10);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_str(10), "café 日本");
}

#[test]
fn test_string_surrogate_pair_round_trip() {
    // Outside the BMP: one char, two UTF-16 units
    let crab = "\u{1F980}";
    assert_eq!(crab.encode_utf16().count(), 2);

    let mut buf = [0u8; 8];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_str(crab, 4);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_str(4), crab);
}

#[test]
fn test_string_truncation_can_split_surrogate_pair() {
    let crab = "\u{1F980}";

    let mut buf = [0u8; 2];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_str(crab, 1);

    // The lone high surrogate decodes as the replacement character
    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_str(1), "\u{FFFD}");
}

// =============================================================================
// Cursor Accounting
// =============================================================================

#[test]
fn test_writer_position_advances() {
    let mut buf = [0u8; 16];
    let mut writer = RecordWriter::new(&mut buf);
    assert_eq!(writer.position(), 0);
    assert_eq!(writer.remaining(), 16);

    writer.put_u32(7);
    assert_eq!(writer.position(), 4);
    assert_eq!(writer.remaining(), 12);

    writer.put_str("ab", 3);
    assert_eq!(writer.position(), 10);
    assert_eq!(writer.remaining(), 6);
}

#[test]
fn test_reader_position_advances() {
    let buf = [0u8; 16];
    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.position(), 0);
    assert_eq!(reader.remaining(), 16);

    reader.get_u64();
    assert_eq!(reader.position(), 8);

    reader.get_bool();
    assert_eq!(reader.position(), 9);
    assert_eq!(reader.remaining(), 7);
}

#[test]
fn test_mixed_field_sequence() {
    let mut buf = [0u8; 15];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_i16(-42);
    writer.put_str("ok", 4);
    writer.put_bool(true);
    writer.put_f32(2.5);
    assert_eq!(writer.position(), 15);
    assert_eq!(writer.remaining(), 0);

    let mut reader = RecordReader::new(&buf);
    assert_eq!(reader.get_i16(), -42);
    assert_eq!(reader.get_str(4), "ok");
    assert!(reader.get_bool());
    assert_eq!(reader.get_f32(), 2.5);
    assert_eq!(reader.remaining(), 0);
}

// =============================================================================
// Out-of-Range Access
// =============================================================================

#[test]
#[should_panic]
fn test_writer_panics_past_end() {
    let mut buf = [0u8; 3];
    let mut writer = RecordWriter::new(&mut buf);
    writer.put_u32(1);
}

#[test]
#[should_panic]
fn test_reader_panics_past_end() {
    let buf = [0u8; 3];
    let mut reader = RecordReader::new(&buf);
    reader.get_u32();
}
