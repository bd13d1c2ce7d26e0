//! Flat-File Record Store
//!
//! Treats a single binary file as a zero-indexed array of fixed-size slots,
//! one encoded [`BookRecord`] per slot.
//!
//! ## Responsibilities
//! - Append, indexed read, and indexed overwrite of 224-byte slots
//! - Linear, case-insensitive title search
//! - O(1) swap-delete (relocates the last record into the freed slot)
//! - Track the logical record count
//!
//! ## File Shape
//! ```text
//! ┌──────────────┬──────────────┬─────┬──────────────────┐
//! │ slot 0       │ slot 1       │ ... │ slot count-1     │
//! │ [0,224)      │ [224,448)    │     │                  │
//! └──────────────┴──────────────┴─────┴──────────────────┘
//! ```
//! No header, no footer. Opening recomputes the count from the file
//! length; reset, append, and delete each leave `file_length == count *
//! RECORD_SIZE`, so the count survives a close/reopen cycle. `write_at`
//! enforces no bound, so writing past the counted slots grows the file
//! ahead of the count.
//!
//! Access is single-threaded and blocking: every operation is a seek
//! followed by one read or write, taking `&mut self`. Sharing a catalog
//! file between processes is unsupported and would corrupt the count.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::{BookRecord, RECORD_SIZE};

/// The flat-file store: an open handle plus the logical record count.
///
/// For every `0 <= i < count()`, the byte range
/// `[i * RECORD_SIZE, (i+1) * RECORD_SIZE)` holds a decodable record.
pub struct BookStore {
    /// Backing file, opened read/write
    file: File,

    /// Leading slots that hold valid records
    count: usize,

    /// Where the file lives, for logging and diagnostics
    path: PathBuf,
}

impl BookStore {
    /// Open or create the catalog file at `path`.
    ///
    /// The logical count is recomputed as `file_length / RECORD_SIZE`,
    /// rounded down; a trailing partial slot is ignored.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;

        let file_len = file.metadata()?.len();
        let count = (file_len / RECORD_SIZE as u64) as usize;

        tracing::debug!(
            "opened catalog {} ({} record(s), {} bytes)",
            path.display(),
            count,
            file_len
        );

        Ok(Self {
            file,
            count,
            path: path.to_path_buf(),
        })
    }

    /// Current logical record count
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the file to zero length and reset the count
    pub fn reset(&mut self) -> Result<()> {
        self.file.set_len(0)?;
        self.count = 0;
        tracing::debug!("reset catalog {}", self.path.display());
        Ok(())
    }

    /// Read and decode the record in slot `index`.
    ///
    /// The caller is responsible for `index < count()`; the store does not
    /// re-validate the bound, so reading past the end surfaces as the
    /// short-read I/O error reported by the file itself.
    pub fn read_at(&mut self, index: usize) -> Result<BookRecord> {
        self.file.seek(SeekFrom::Start(slot_offset(index)))?;
        let mut buf = [0u8; RECORD_SIZE];
        self.file.read_exact(&mut buf)?;
        BookRecord::decode(&buf)
    }

    /// Encode `record` and write it into slot `index`, overwriting any
    /// existing slot content.
    ///
    /// No bound is enforced against `count()`; writing at `index ==
    /// count()` is how [`append`](Self::append) grows the file.
    pub fn write_at(&mut self, index: usize, record: &BookRecord) -> Result<()> {
        self.file.seek(SeekFrom::Start(slot_offset(index)))?;
        self.file.write_all(&record.encode())?;
        Ok(())
    }

    /// Write `record` into the first free slot and grow the count by one
    pub fn append(&mut self, record: &BookRecord) -> Result<()> {
        self.write_at(self.count, record)?;
        self.count += 1;
        Ok(())
    }

    /// Linear scan for the first record whose title matches `title`,
    /// case-insensitively. Returns the slot index, or `None`.
    ///
    /// O(n) per call with no index structure, which is fine at
    /// personal-catalog scale.
    pub fn search_by_title(&mut self, title: &str) -> Result<Option<usize>> {
        let needle = title.to_lowercase();
        for index in 0..self.count {
            let record = self.read_at(index)?;
            if record.title.to_lowercase() == needle {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Delete the first record whose title matches `title`,
    /// case-insensitively. Returns whether a deletion occurred.
    ///
    /// Deletion is a swap: the last record is rewritten into the matched
    /// slot and the count shrinks by one, so the remaining records keep
    /// their slots except for the relocated one (insertion order is not
    /// preserved). When the match is the last slot the swap degenerates to
    /// rewriting that slot with its own data. The file is then truncated
    /// to the new count so a reopen cannot resurrect the stale last slot.
    pub fn delete_by_title(&mut self, title: &str) -> Result<bool> {
        let index = match self.search_by_title(title)? {
            Some(index) => index,
            None => return Ok(false),
        };

        let last = self.count - 1;
        let moved = self.read_at(last)?;
        self.write_at(index, &moved)?;
        self.count -= 1;
        self.file.set_len(slot_offset(self.count))?;

        tracing::debug!(
            "deleted '{}' from slot {} (last slot was {})",
            title,
            index,
            last
        );
        Ok(true)
    }

    /// Sync and release the file handle.
    ///
    /// Consumes the store, so no operation can follow a close.
    pub fn close(self) -> Result<()> {
        self.file.sync_all()?;
        Ok(())
    }
}

/// Byte offset of slot `index`
fn slot_offset(index: usize) -> u64 {
    index as u64 * RECORD_SIZE as u64
}
