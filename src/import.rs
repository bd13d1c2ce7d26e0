//! Plain-Text Catalog Ingestion
//!
//! Seeds a store from human-editable text files: one description file per
//! book, plus a list file naming the description files to load.
//!
//! ## Book File Format
//!
//! Six lines, by position:
//!
//! ```text
//! line 1   title
//! line 2   author
//! line 3   series
//! line 4   page count (integer)
//! line 5   start date
//! line 6   end date
//! ```
//!
//! Missing trailing lines fall back to field defaults (empty string, zero
//! pages); a page-count line that is present but not a valid integer is
//! rejected. The reading flags are derived, not stored: a non-empty start
//! date marks the book as started, a non-empty end date as finished.
//!
//! ## List File Format
//!
//! One book-file path per line. Blank lines are skipped. Relative paths
//! are resolved against the list file's own directory, so a catalog
//! directory can be moved as a unit.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Result, ShelfError};
use crate::record::BookRecord;
use crate::store::BookStore;

// ============================================================================
// Book Files
// ============================================================================

/// Parse a single six-line book description file into a record.
///
/// A page-count line that is present but fails to parse as an integer
/// (a blank line included) is rejected with [`ShelfError::Import`]; an
/// absent line means zero pages.
pub fn read_book_file(path: impl AsRef<Path>) -> Result<BookRecord> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| ShelfError::Import(format!("cannot open {}: {}", path.display(), err)))?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line?);
    }

    let pages = match lines.get(3) {
        None => 0,
        Some(line) => line.parse::<i16>().map_err(|_| {
            ShelfError::Import(format!(
                "invalid page count '{}' in {}",
                line,
                path.display()
            ))
        })?,
    };

    let start_date = lines.get(4).cloned().unwrap_or_default();
    let end_date = lines.get(5).cloned().unwrap_or_default();

    Ok(BookRecord {
        title: lines.first().cloned().unwrap_or_default(),
        author: lines.get(1).cloned().unwrap_or_default(),
        series: lines.get(2).cloned().unwrap_or_default(),
        pages,
        started: !start_date.is_empty(),
        finished: !end_date.is_empty(),
        start_date,
        end_date,
    })
}

// ============================================================================
// List Files
// ============================================================================

/// Read a list file into the book-file paths it names.
///
/// Blank lines (after trimming) are skipped. Relative entries are joined
/// onto the list file's parent directory; absolute entries are kept as
/// written.
pub fn read_list_file(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| ShelfError::Import(format!("cannot open {}: {}", path.display(), err)))?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));

    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        // join() discards the base when the entry is already absolute
        entries.push(base.join(trimmed));
    }
    Ok(entries)
}

// ============================================================================
// Catalog Loading
// ============================================================================

/// Append every book named by the list file at `list_path` to `store`.
///
/// Returns the number of records appended. Fails on the first unreadable
/// or malformed book file, leaving the records appended so far in place.
pub fn load_catalog(store: &mut BookStore, list_path: impl AsRef<Path>) -> Result<usize> {
    let list_path = list_path.as_ref();
    let entries = read_list_file(list_path)?;

    let mut loaded = 0;
    for entry in &entries {
        let record = read_book_file(entry)?;
        tracing::debug!("loaded '{}' from {}", record.title, entry.display());
        store.append(&record)?;
        loaded += 1;
    }

    tracing::info!("imported {} book(s) from {}", loaded, list_path.display());
    Ok(loaded)
}
