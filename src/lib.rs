//! # Shiftbook - personal work-shift tracker
//!
//! Records work shifts per day, totals them per month with overtime broken
//! out, and exports timesheets that split hours across user-defined columns.
//!
//! ## Features
//!
//! - **Shift Recording**: Overnight shifts, breaks, notes, templates and copies
//! - **Monthly Totals**: Total and overtime hours, days worked
//! - **Timesheet Export**: Excel, CSV and JSON with per-column hours
//! - **Backups**: Whole-database JSON export and import
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftbook::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
