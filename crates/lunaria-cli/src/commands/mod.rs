//! CLI command modules plus shared helpers.

pub mod config;
pub mod cycle;
pub mod data;
pub mod export;
pub mod remind;
pub mod status;
pub mod symptom;
pub mod user;

use chrono::NaiveDate;
use lunaria_core::storage::{AppConfig, FileVault};
use lunaria_core::store::CycleStore;

/// Open the store against the default vault and select the requested
/// user. Also flips the first-launch flag the first time any command
/// touches the store.
pub(crate) fn open_store(
    user_index: usize,
) -> Result<CycleStore<FileVault>, Box<dyn std::error::Error>> {
    let mut store = CycleStore::open(FileVault::open()?)?;

    let mut config = AppConfig::load_or_default();
    if !config.has_launched_before {
        config.has_launched_before = true;
        let _ = config.save();
    }

    if user_index != 0 {
        store.select_user(user_index)?;
    }
    Ok(store)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD").into())
}
