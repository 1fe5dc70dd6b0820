use super::common::open_book;
use crate::{
    db::{store::SqliteStore, undo::UndoLog},
    libs::{messages::Message, month::date_key},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UndoArgs {}

pub async fn cmd(_args: UndoArgs) -> Result<()> {
    let mut log = UndoLog::new(SqliteStore::new()?);
    let Some(snapshot) = log.last()? else {
        msg_info!(Message::NothingToUndo);
        return Ok(());
    };

    let date = snapshot.date;
    open_book(date)?.restore(snapshot)?;
    log.clear()?;
    msg_success!(Message::RemovalUndone(date_key(date)));
    Ok(())
}
