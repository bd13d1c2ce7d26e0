//! Book Record Schema
//!
//! Defines the fixed field layout of one catalog entry and its whole-record
//! encode/decode built on the codec cursors.
//!
//! ## Record Layout (224 bytes, big-endian multi-byte fields)
//! ```text
//! ┌───────────┬────────────┬──────────────────────────────────┐
//! │ Offset    │ Field      │ Width                            │
//! ├───────────┼────────────┼──────────────────────────────────┤
//! │ [0,64)    │ title      │ 32 × 2-byte units, zero-padded   │
//! │ [64,116)  │ author     │ 26 × 2-byte units, zero-padded   │
//! │ [116,180) │ series     │ 32 × 2-byte units, zero-padded   │
//! │ [180,182) │ pages      │ 16-bit signed integer            │
//! │ [182,183) │ started    │ 1 byte, 0/nonzero                │
//! │ [183,184) │ finished   │ 1 byte, 0/nonzero                │
//! │ [184,204) │ start_date │ 10 × 2-byte units, zero-padded   │
//! │ [204,224) │ end_date   │ 10 × 2-byte units, zero-padded   │
//! └───────────┴────────────┴──────────────────────────────────┘
//! ```
//!
//! There is no header, no magic number, no version field, and no checksum;
//! the record size is constant for the lifetime of a catalog file.

use std::fmt;

use crate::codec::{RecordReader, RecordWriter};
use crate::error::{Result, ShelfError};

// =============================================================================
// Field Widths (UTF-16 code units per text field)
// =============================================================================

/// Max width of the title field
pub const TITLE_WIDTH: usize = 32;

/// Max width of the author field
pub const AUTHOR_WIDTH: usize = 26;

/// Max width of the series field
pub const SERIES_WIDTH: usize = 32;

/// Max width of either date field
pub const DATE_WIDTH: usize = 10;

/// Total on-disk size of one encoded record in bytes: three text fields at
/// two bytes per unit, a two-byte page count, two one-byte flags, and two
/// date fields.
pub const RECORD_SIZE: usize = 2 * TITLE_WIDTH
    + 2 * AUTHOR_WIDTH
    + 2 * SERIES_WIDTH
    + 2
    + 1
    + 1
    + 2 * DATE_WIDTH
    + 2 * DATE_WIDTH;

// =============================================================================
// BookRecord
// =============================================================================

/// One catalog entry, an immutable value with field-level equality.
///
/// Text fields longer than their layout width survive `encode` only up to
/// that width (silent truncation), so `decode(encode(r))` equals `r` exactly
/// when every text field fits its width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookRecord {
    /// Title, the search key; compared case-insensitively by the store
    pub title: String,

    /// Author name; empty when unknown
    pub author: String,

    /// Series name; empty means "no series"
    pub series: String,

    /// Total page count
    pub pages: i16,

    /// Reading was started
    pub started: bool,

    /// Reading was completed
    pub finished: bool,

    /// Date reading started; meaningful only if `started`
    pub start_date: String,

    /// Date reading finished; meaningful only if `finished`
    pub end_date: String,
}

impl BookRecord {
    /// Encode into one fixed-size binary blob.
    ///
    /// Fields are packed in layout order at monotonically increasing
    /// offsets with no gaps.
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        let mut writer = RecordWriter::new(&mut buf);

        writer.put_str(&self.title, TITLE_WIDTH);
        writer.put_str(&self.author, AUTHOR_WIDTH);
        writer.put_str(&self.series, SERIES_WIDTH);
        writer.put_i16(self.pages);
        writer.put_bool(self.started);
        writer.put_bool(self.finished);
        writer.put_str(&self.start_date, DATE_WIDTH);
        writer.put_str(&self.end_date, DATE_WIDTH);

        debug_assert_eq!(writer.position(), RECORD_SIZE);
        buf
    }

    /// Decode from a binary blob of at least [`RECORD_SIZE`] bytes.
    ///
    /// Fails only on a short buffer. Any byte pattern of sufficient length
    /// decodes to some valid record: strings tolerate arbitrary padding and
    /// the flags treat every nonzero byte as true.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < RECORD_SIZE {
            return Err(ShelfError::MalformedRecord(format!(
                "expected {} bytes, got {}",
                RECORD_SIZE,
                buf.len()
            )));
        }

        let mut reader = RecordReader::new(buf);

        let title = reader.get_str(TITLE_WIDTH);
        let author = reader.get_str(AUTHOR_WIDTH);
        let series = reader.get_str(SERIES_WIDTH);
        let pages = reader.get_i16();
        let started = reader.get_bool();
        let finished = reader.get_bool();
        let start_date = reader.get_str(DATE_WIDTH);
        let end_date = reader.get_str(DATE_WIDTH);

        Ok(Self {
            title,
            author,
            series,
            pages,
            started,
            finished,
            start_date,
            end_date,
        })
    }
}

impl fmt::Display for BookRecord {
    /// Human-readable one-line summary, e.g.
    /// `Dune (Dune Chronicles) by Frank Herbert with 412 pages. Read from
    /// 2024-01-02 to 2024-02-11.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.series.is_empty() {
            write!(f, " ({})", self.series)?;
        }
        if !self.author.is_empty() {
            write!(f, " by {}", self.author)?;
        }
        write!(f, " with {} pages.", self.pages)?;
        if self.finished {
            write!(f, " Read from {} to {}.", self.start_date, self.end_date)?;
        } else if self.started {
            write!(f, " Started on {}.", self.start_date)?;
        }
        Ok(())
    }
}
