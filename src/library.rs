//! Library Facade
//!
//! The top-level handle that callers interact with. A [`Library`] owns the
//! configuration and the backing [`BookStore`] and exposes catalog
//! operations in domain terms (add, find, remove) rather than slot terms.
//!
//! ```text
//!                ┌─────────────────────────┐
//!                │         Library         │
//!                │  (open / add / find /   │
//!                │   remove / titles)      │
//!                └───────────┬─────────────┘
//!                            │
//!                ┌───────────▼─────────────┐
//!                │        BookStore        │
//!                │  (slots in a flat file) │
//!                └─────────────────────────┘
//! ```
//!
//! Opening with an import list in the [`Config`] seeds the catalog from
//! plain-text book files before the first operation runs.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::import;
use crate::record::BookRecord;
use crate::store::BookStore;

/// An open book catalog.
pub struct Library {
    config: Config,
    store: BookStore,
}

impl Library {
    /// Open the catalog described by `config`.
    ///
    /// When `config.import_list` is set, the named list file is ingested
    /// immediately; with `reset_on_import` the store is truncated first,
    /// so the file ends up holding exactly the imported records.
    pub fn open(config: Config) -> Result<Self> {
        let mut store = BookStore::open(&config.db_path)?;

        if let Some(list) = &config.import_list {
            if config.reset_on_import {
                store.reset()?;
            }
            import::load_catalog(&mut store, list)?;
        }

        tracing::info!(
            "library open at {} with {} record(s)",
            config.db_path.display(),
            store.count()
        );

        Ok(Self { config, store })
    }

    /// Open the catalog file at `path` with default settings and no import
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(Config::builder().db_path(path.as_ref()).build())
    }

    /// Append a book to the catalog
    pub fn add(&mut self, record: &BookRecord) -> Result<()> {
        self.store.append(record)
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.store.count()
    }

    /// Whether the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Titles of every book, in slot order
    pub fn titles(&mut self) -> Result<Vec<String>> {
        let mut titles = Vec::with_capacity(self.store.count());
        for index in 0..self.store.count() {
            titles.push(self.store.read_at(index)?.title);
        }
        Ok(titles)
    }

    /// Look up a book by title, case-insensitively
    pub fn find(&mut self, title: &str) -> Result<Option<BookRecord>> {
        match self.store.search_by_title(title)? {
            Some(index) => Ok(Some(self.store.read_at(index)?)),
            None => Ok(None),
        }
    }

    /// Remove the first book matching `title`, case-insensitively.
    /// Returns whether a book was removed.
    pub fn remove(&mut self, title: &str) -> Result<bool> {
        self.store.delete_by_title(title)
    }

    /// Read the record in slot `index` directly
    pub fn record_at(&mut self, index: usize) -> Result<BookRecord> {
        self.store.read_at(index)
    }

    /// Drop every record from the catalog
    pub fn reset(&mut self) -> Result<()> {
        self.store.reset()
    }

    /// Path of the backing catalog file
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// The configuration this library was opened with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sync the catalog file and release it
    pub fn close(self) -> Result<()> {
        tracing::info!("closing library at {}", self.config.db_path.display());
        self.store.close()
    }
}
