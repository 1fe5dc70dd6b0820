use super::common::{open_month, parse_month_arg};
use crate::{
    libs::{formatter::format_hours, messages::Message, summary::MonthSummary, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MonthArgs {
    /// `current` or YYYY-MM
    #[arg(default_value = "current")]
    month: String,
}

pub async fn cmd(args: MonthArgs) -> Result<()> {
    let (year, month) = parse_month_arg(&args.month)?;
    let book = open_month(year, month)?;
    let doc = book.doc();
    if doc.is_empty() {
        msg_info!(Message::MonthEmpty(doc.label()));
        return Ok(());
    }

    let summary = MonthSummary::from_document(doc);
    msg_print!(Message::MonthHeader(doc.label()), true);
    View::month(&summary)?;
    msg_print!(Message::MonthTotals {
        total: format_hours(summary.total_minutes),
        ot: format_hours(summary.ot_minutes),
        days: summary.days_worked(),
    });
    Ok(())
}
