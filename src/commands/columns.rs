use crate::{
    db::{columns::ExportColumns, store::SqliteStore},
    libs::{messages::Message, view::View},
    msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ColumnsArgs {
    #[command(subcommand)]
    command: Option<ColumnsCommand>,
}

#[derive(Debug, Subcommand)]
enum ColumnsCommand {
    /// List the export columns
    Show,
    /// Replace the export columns; blank names are dropped, none at all restores the defaults
    Set { names: Vec<String> },
}

pub async fn cmd(args: ColumnsArgs) -> Result<()> {
    let mut columns = ExportColumns::new(SqliteStore::new()?);
    match args.command.unwrap_or(ColumnsCommand::Show) {
        ColumnsCommand::Show => {
            msg_print!(Message::ExportColumnsHeader);
            View::columns(&columns.get()?)?;
        }
        ColumnsCommand::Set { names } => {
            let saved = columns.set(&names)?;
            msg_success!(Message::ExportColumnsSaved(saved.len()));
            View::columns(&saved)?;
        }
    }
    Ok(())
}
