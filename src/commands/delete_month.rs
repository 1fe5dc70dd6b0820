use super::common::{open_month, parse_month_arg};
use crate::{
    libs::{messages::Message, month::month_key},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteMonthArgs {
    /// YYYY-MM
    month: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteMonthArgs) -> Result<()> {
    let (year, month) = parse_month_arg(&args.month)?;
    let label = month_key(year, month);

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteMonth(label.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    open_month(year, month)?.delete()?;
    msg_success!(Message::MonthDeleted(label));
    Ok(())
}
