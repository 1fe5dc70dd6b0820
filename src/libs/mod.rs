//! Core library modules.
//!
//! - **Time arithmetic**: [`time`] parses wall-clock times and computes shift durations
//! - **Data model**: [`shift`], [`month`] and the persisting [`book`] handle
//! - **Aggregation**: [`summary`] totals and the [`projection`] onto export columns
//! - **Output**: [`export`] spreadsheets, [`view`] console tables, [`formatter`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//!
//! ## Usage
//!
//! ```rust
//! use shiftbook::libs::month::MonthDocument;
//! use shiftbook::libs::shift::{Shift, ShiftType};
//! use shiftbook::libs::summary::total_minutes;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let doc = MonthDocument::new(2025, 1).add_shift(date, Shift::new("22:00", "06:00", 30, ShiftType::Work));
//! assert_eq!(total_minutes(doc.all_shifts()), 450);
//! ```

pub mod book;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod month;
pub mod projection;
pub mod shift;
pub mod summary;
pub mod time;
pub mod view;
