//! Terminal front end for the shoplist shopping-list manager.
//!
//! # Responsibility
//! - Bootstrap logging, storage and the core session.
//! - Own the terminal lifecycle; delegate all list decisions to core.

use color_eyre::eyre::eyre;
use shoplist_core::{default_log_level, init_logging, ListSession, SqliteItemStore};
use std::env;
use std::path::PathBuf;

use crate::app::App;

pub mod app;
pub mod event;
pub mod popup;
pub mod ui;

const DB_FILE_NAME: &str = "shoplist.sqlite3";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let data_dir = data_dir()?;
    std::fs::create_dir_all(&data_dir)?;

    let level = env::var("SHOPLIST_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = data_dir.join("logs");
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| eyre!("data directory path is not valid UTF-8"))?;
    init_logging(&level, log_dir).map_err(|message| eyre!(message))?;

    let store = SqliteItemStore::open(data_dir.join(DB_FILE_NAME))?;
    let session = ListSession::open(store)?;
    log::info!(
        "event=tui_start module=tui status=ok core_version={}",
        shoplist_core::core_version()
    );

    let terminal = ratatui::init();
    let result = App::new(session).run(terminal);
    ratatui::restore();
    log::info!("event=tui_stop module=tui status=ok");
    result
}

/// Resolves the data directory: `SHOPLIST_DATA_DIR` wins, otherwise
/// `$HOME/.shoplist`.
fn data_dir() -> color_eyre::Result<PathBuf> {
    if let Some(dir) = env::var_os("SHOPLIST_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = env::var_os("HOME")
        .ok_or_else(|| eyre!("HOME is not set; set SHOPLIST_DATA_DIR explicitly"))?;
    Ok(PathBuf::from(home).join(".shoplist"))
}
