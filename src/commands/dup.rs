use super::common::{open_book, parse_date, resolve_shift_id};
use crate::{
    libs::{messages::Message, month::date_key},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DupArgs {
    /// Date of the shift, `today` or YYYY-MM-DD
    date: String,
    /// Shift id or a unique prefix of it
    id: String,
}

pub async fn cmd(args: DupArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let mut book = open_book(date)?;
    let copy = match resolve_shift_id(book.shifts(date), &args.id)? {
        Some(id) => book.duplicate_shift(date, &id)?,
        None => None,
    };

    if copy.is_some() {
        msg_success!(Message::ShiftDuplicated(date_key(date)));
    } else {
        msg_error!(Message::ShiftNotFound(args.id));
    }
    Ok(())
}
