use super::common::{open_book, parse_date};
use crate::{
    db::{columns::ExportColumns, store::SqliteStore},
    libs::{formatter::format_hours, messages::Message, month::date_key, summary, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DayArgs {
    /// `today` or YYYY-MM-DD
    #[arg(default_value = "today")]
    date: String,
}

pub async fn cmd(args: DayArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let book = open_book(date)?;
    let shifts = book.shifts(date);
    if shifts.is_empty() {
        msg_info!(Message::ShiftsNotFoundForDate(date_key(date)));
        return Ok(());
    }

    let columns = ExportColumns::new(SqliteStore::new()?).get()?;
    msg_print!(Message::DayHeader(date.format("%A, %Y-%m-%d").to_string()), true);
    View::day(shifts, &columns)?;
    msg_print!(Message::DayTotals {
        total: format_hours(summary::total_minutes(shifts)),
        ot: format_hours(summary::ot_minutes(shifts)),
    });
    Ok(())
}
