use crate::{
    db::{months::Months, store::SqliteStore},
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    #[command(subcommand)]
    command: BackupCommand,
}

#[derive(Debug, Subcommand)]
enum BackupCommand {
    /// Write every stored month to a JSON file
    Export {
        /// Defaults to shiftbook_backup_YYYYMMDD.json in the working directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Restore months from a JSON backup; incomplete entries are skipped
    Import { path: PathBuf },
}

pub async fn cmd(args: BackupArgs) -> Result<()> {
    let mut months = Months::new(SqliteStore::new()?);
    match args.command {
        BackupCommand::Export { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(format!("shiftbook_backup_{}.json", Local::now().format("%Y%m%d"))));
            fs::write(&path, months.export_json()?)?;
            msg_success!(Message::BackupCreated(path.display().to_string()));
        }
        BackupCommand::Import { path } => {
            let payload = fs::read_to_string(&path)?;
            let imported = months.import_json(&payload)?;
            msg_success!(Message::BackupImported(imported));
        }
    }
    Ok(())
}
