//! Project-wide constants.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Default REST endpoint serving `/users`.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default HTTP timeout for the user fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Filler for address/company fields of locally created users.
pub const PLACEHOLDER: &str = "N/A";

/// Config key holding the persisted endpoint override.
pub const API_URL_KEY: &str = "api_url";

/// Default database path: `~/.roster/roster.db`.
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".roster").join("roster.db"))
}
