use super::common::{open_book, parse_date};
use crate::{
    libs::{messages::Message, month::date_key, shift::Shift},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::Datelike;
use clap::Args;

#[derive(Debug, Args)]
pub struct CopyPrevArgs {
    /// Day to copy into, `today` or YYYY-MM-DD
    #[arg(default_value = "today")]
    date: String,
}

/// Appends copies of the previous day's shifts, reaching into the previous
/// month when `date` is the 1st.
pub async fn cmd(args: CopyPrevArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let Some(previous) = date.pred_opt() else {
        msg_bail_anyhow!(Message::InvalidDate(args.date));
    };

    let mut book = open_book(date)?;
    let source: Vec<Shift> = if previous.month() == date.month() {
        book.shifts(previous).to_vec()
    } else {
        book.months()
            .load(previous.year(), previous.month())?
            .shifts_for_date(previous)
            .to_vec()
    };

    if source.is_empty() {
        msg_info!(Message::PreviousDayEmpty(date_key(date)));
        return Ok(());
    }

    let mut shifts = book.shifts(date).to_vec();
    shifts.extend(source.iter().map(Shift::carry_over));
    book.replace_shifts_for_date(date, shifts)?;

    msg_success!(Message::PreviousDayCopied(source.len(), date_key(date)));
    Ok(())
}
