use super::common::{open_month, parse_month_arg};
use crate::{
    db::{columns::ExportColumns, store::SqliteStore},
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        month::month_key,
        projection::MonthTable,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// `current` or YYYY-MM
    #[arg(default_value = "current")]
    month: String,
    /// Defaults to the configured export format
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,
    /// Defaults to shiftbook_YYYY-MM.<ext> in the working directory
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Sheet title; defaults to the configured one
    #[arg(short, long)]
    title: Option<String>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let (year, month) = parse_month_arg(&args.month)?;
    let export_config = Config::read()?.export_config();
    let format = args.format.unwrap_or(export_config.format);
    let title = args.title.unwrap_or(export_config.title);

    msg_info!(Message::ExportingMonth {
        month: month_key(year, month),
        format: format.extension().to_string(),
    });

    let book = open_month(year, month)?;
    let columns = ExportColumns::new(SqliteStore::new()?).get()?;
    let table = MonthTable::project(book.doc(), &columns);
    let path = Exporter::new(format, args.output, year, month).export(&table, &title)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
