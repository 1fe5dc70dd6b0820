use super::common::{open_book, parse_date, parse_time_arg, warn_if_long};
use crate::{
    libs::{
        config::Config,
        messages::Message,
        month::date_key,
        shift::{Shift, ShiftType},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Date of the shift, `today` or YYYY-MM-DD
    #[arg(default_value = "today")]
    date: String,
    /// Start time, HH:mm
    #[arg(short, long)]
    start: Option<String>,
    /// End time, HH:mm; earlier than start for overnight shifts
    #[arg(short, long)]
    end: Option<String>,
    /// Unpaid break in minutes
    #[arg(short, long = "break")]
    break_minutes: Option<u32>,
    #[arg(short = 't', long = "type", value_enum)]
    shift_type: Option<ShiftType>,
    #[arg(short, long)]
    note: Option<String>,
    #[arg(short, long)]
    location: Option<String>,
    /// Export column index, 0-based
    #[arg(short, long)]
    column: Option<i64>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let defaults = Config::read()?.shift_defaults();

    let start = parse_time_arg(args.start.as_deref().unwrap_or(&defaults.start))?;
    let end = parse_time_arg(args.end.as_deref().unwrap_or(&defaults.end))?;
    let shift = Shift::new(
        &start,
        &end,
        args.break_minutes.unwrap_or(defaults.break_minutes),
        args.shift_type.unwrap_or(defaults.shift_type),
    )
    .with_note(args.note.as_deref().unwrap_or(""))
    .with_location(args.location.as_deref())
    .with_column(args.column);

    warn_if_long(&shift);
    let mut book = open_book(date)?;
    book.add_shift(date, shift)?;

    msg_success!(Message::ShiftAdded(date_key(date)));
    Ok(())
}
