//! # ShelfDB
//!
//! A small personal book catalog on a single flat file:
//! - Fixed-width binary records (no headers, no framing)
//! - UTF-16 text fields with silent truncation and zero padding
//! - O(1) append and swap-delete, linear title search
//! - Optional seeding from plain-text book description files
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       CLI (menu loop)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Library                                │
//! │              (add / find / remove / titles)                  │
//! └──────────┬─────────────────────────────────┬────────────────┘
//!            │                                 │
//!            ▼                                 ▼
//!     ┌─────────────┐                   ┌─────────────┐
//!     │  BookStore  │                   │   Import    │
//!     │ (flat file) │                   │ (text files)│
//!     └──────┬──────┘                   └─────────────┘
//!            │
//!            ▼
//!     ┌─────────────┐
//!     │    Codec    │
//!     │ (fixed-width│
//!     │   records)  │
//!     └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod record;
pub mod store;
pub mod import;
pub mod library;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ShelfError};
pub use config::Config;
pub use record::{BookRecord, RECORD_SIZE};
pub use store::BookStore;
pub use library::Library;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShelfDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
