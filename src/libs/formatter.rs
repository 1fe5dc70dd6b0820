//! Duration formatting for console output and exports.
//!
//! ## Format Specifications
//!
//! - [`format_hours`]: compact form used in tables, `8h` or `8h30m`
//! - [`format_decimal`]: decimal hours with two places, `8.50`
//!
//! ## Examples
//!
//! ```rust
//! use shiftbook::libs::formatter::{format_decimal, format_hours};
//!
//! assert_eq!(format_hours(510), "8h30m");
//! assert_eq!(format_decimal(8.5), "8.50");
//! ```

/// Compact hours-and-minutes form: `8h`, `8h30m`, `0h`.
pub fn format_hours(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h{}m", hours, mins)
    }
}

/// Decimal hours with exactly two fractional digits.
pub fn format_decimal(hours: f64) -> String {
    format!("{:.2}", hours)
}
