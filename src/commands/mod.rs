//! Command-line interface.
//!
//! Each subcommand lives in its own module exposing an `Args` struct and a
//! `cmd` entry point; [`Cli::menu`] parses the arguments and dispatches.
//!
//! ## Commands
//!
//! - **Shifts**: `add`, `edit`, `rm`, `undo`, `dup`, `template`, `copy-prev`
//! - **Views**: `day`, `month`
//! - **Export**: `export`, `columns`
//! - **Data**: `backup`, `delete-month`
//! - **Setup**: `init`

pub mod add;
pub mod backup;
pub mod columns;
pub mod common;
pub mod copy_prev;
pub mod day;
pub mod delete_month;
pub mod dup;
pub mod edit;
pub mod export;
pub mod init;
pub mod month;
pub mod rm;
pub mod template;
pub mod undo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure shift defaults and export settings")]
    Init(init::InitArgs),
    #[command(about = "Add a shift")]
    Add(add::AddArgs),
    #[command(about = "Edit a shift")]
    Edit(edit::EditArgs),
    #[command(about = "Remove a shift")]
    Rm(rm::RmArgs),
    #[command(about = "Restore the day changed by the last removal")]
    Undo(undo::UndoArgs),
    #[command(about = "Duplicate a shift on the same day")]
    Dup(dup::DupArgs),
    #[command(about = "Add the 08:00-12:00 and 13:00-17:00 template shifts")]
    Template(template::TemplateArgs),
    #[command(about = "Copy the previous day's shifts")]
    CopyPrev(copy_prev::CopyPrevArgs),
    #[command(about = "Show the shifts of a day")]
    Day(day::DayArgs),
    #[command(about = "Show monthly totals")]
    Month(month::MonthArgs),
    #[command(about = "Export a month as a timesheet")]
    Export(export::ExportArgs),
    #[command(about = "Show or set the export columns")]
    Columns(columns::ColumnsArgs),
    #[command(about = "Export or import a JSON backup")]
    Backup(backup::BackupArgs),
    #[command(about = "Delete all shifts of a month")]
    DeleteMonth(delete_month::DeleteMonthArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Rm(args) => rm::cmd(args).await,
            Commands::Undo(args) => undo::cmd(args).await,
            Commands::Dup(args) => dup::cmd(args).await,
            Commands::Template(args) => template::cmd(args).await,
            Commands::CopyPrev(args) => copy_prev::cmd(args).await,
            Commands::Day(args) => day::cmd(args).await,
            Commands::Month(args) => month::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Columns(args) => columns::cmd(args).await,
            Commands::Backup(args) => backup::cmd(args).await,
            Commands::DeleteMonth(args) => delete_month::cmd(args).await,
        }
    }
}
