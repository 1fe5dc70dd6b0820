//! Persistence layer.
//!
//! Everything is stored in one SQLite key/value table: each month is a
//! complete JSON document under `month:YYYY-MM`, and the export column labels
//! live under their own key. Repositories are generic over [`store::KvStore`]
//! so they run against SQLite in the application and an in-memory map in
//! tests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftbook::db::months::Months;
//! use shiftbook::db::store::SqliteStore;
//!
//! let months = Months::new(SqliteStore::new()?);
//! let january = months.load(2025, 1)?;
//! println!("{} shifts", january.all_shifts().count());
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup for the application database.
pub mod db;

/// Versioned schema changes.
pub mod migrations;

/// Key/value store contract with SQLite and in-memory implementations.
pub mod store;

/// Month documents and JSON backups.
pub mod months;

/// Export column labels.
pub mod columns;

/// Last removal, for `undo`.
pub mod undo;
