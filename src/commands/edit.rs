use super::common::{open_book, parse_date, parse_time_arg, resolve_shift_id, warn_if_long};
use crate::{
    libs::{messages::Message, month::date_key, shift::ShiftType},
    msg_error, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Date of the shift, `today` or YYYY-MM-DD
    date: String,
    /// Shift id or a unique prefix of it
    id: String,
    #[arg(short, long)]
    start: Option<String>,
    #[arg(short, long)]
    end: Option<String>,
    #[arg(short, long = "break")]
    break_minutes: Option<u32>,
    #[arg(short = 't', long = "type", value_enum)]
    shift_type: Option<ShiftType>,
    #[arg(short, long)]
    note: Option<String>,
    /// Location; an empty value clears it
    #[arg(short, long)]
    location: Option<String>,
    #[arg(short, long)]
    column: Option<i64>,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.start.is_some()
            || self.end.is_some()
            || self.break_minutes.is_some()
            || self.shift_type.is_some()
            || self.note.is_some()
            || self.location.is_some()
            || self.column.is_some()
    }
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    if !args.has_changes() {
        msg_warning!(Message::NoFieldsToUpdate);
        return Ok(());
    }

    let date = parse_date(&args.date)?;
    let mut book = open_book(date)?;
    let Some(id) = resolve_shift_id(book.shifts(date), &args.id)? else {
        msg_error!(Message::ShiftNotFound(args.id));
        return Ok(());
    };
    let Some(mut shift) = book.doc().find_shift(date, &id).cloned() else {
        msg_error!(Message::ShiftNotFound(args.id));
        return Ok(());
    };

    if let Some(start) = &args.start {
        shift.start = parse_time_arg(start)?;
    }
    if let Some(end) = &args.end {
        shift.end = parse_time_arg(end)?;
    }
    if let Some(break_minutes) = args.break_minutes {
        shift.break_minutes = break_minutes;
    }
    if let Some(shift_type) = args.shift_type {
        shift.shift_type = shift_type;
    }
    if let Some(note) = &args.note {
        shift = shift.with_note(note);
    }
    if let Some(location) = &args.location {
        shift = shift.with_location(Some(location));
    }
    if let Some(column) = args.column {
        shift = shift.with_column(Some(column));
    }

    warn_if_long(&shift);
    book.update_shift(date, shift)?;

    msg_success!(Message::ShiftUpdated(date_key(date)));
    Ok(())
}
