use super::common::{open_book, parse_date};
use crate::{
    libs::{messages::Message, month::date_key},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Day to fill, `today` or YYYY-MM-DD
    #[arg(default_value = "today")]
    date: String,
}

pub async fn cmd(args: TemplateArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    open_book(date)?.add_template_shifts(date)?;
    msg_success!(Message::TemplateShiftsAdded(date_key(date)));
    Ok(())
}
