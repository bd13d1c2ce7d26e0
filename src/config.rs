//! Configuration for shelfdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a shelfdb catalog
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the catalog file, a flat array of fixed-size records.
    /// Created on first open if it does not exist.
    pub db_path: PathBuf,

    // -------------------------------------------------------------------------
    // Import Configuration
    // -------------------------------------------------------------------------
    /// Optional list file naming one book text file per line; every listed
    /// book is ingested when the library opens
    pub import_list: Option<PathBuf>,

    /// Wipe existing records before ingesting `import_list`
    pub reset_on_import: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./books.dat"),
            import_list: None,
            reset_on_import: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the catalog file path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Set the list file to ingest on open
    pub fn import_list(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.import_list = Some(path.into());
        self
    }

    /// Set whether existing records are wiped before an import
    pub fn reset_on_import(mut self, reset: bool) -> Self {
        self.config.reset_on_import = reset;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
