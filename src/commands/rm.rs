use super::common::{open_book, parse_date, resolve_shift_id};
use crate::{
    db::{store::SqliteStore, undo::UndoLog},
    libs::{messages::Message, month::date_key},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RmArgs {
    /// Date of the shift, `today` or YYYY-MM-DD
    date: String,
    /// Shift id or a unique prefix of it
    id: String,
}

pub async fn cmd(args: RmArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let mut book = open_book(date)?;
    let Some(id) = resolve_shift_id(book.shifts(date), &args.id)? else {
        msg_error!(Message::ShiftNotFound(args.id));
        return Ok(());
    };

    let snapshot = book.remove_shift(date, &id)?;
    UndoLog::new(SqliteStore::new()?).record(&snapshot)?;
    msg_success!(Message::ShiftRemoved(date_key(date)));
    Ok(())
}
