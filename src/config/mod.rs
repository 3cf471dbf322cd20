//! Key-value settings backed by SQLite.
//!
//! Holds settings that outlive a session, such as the endpoint chosen
//! with `/endpoint`. User records are never stored here.

use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OptionalExtension};
use std::sync::{Mutex, MutexGuard};

use crate::consts::API_URL_KEY;

/// Persistent key-value configuration store.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the settings table in the given database.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open config database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS settings (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create settings table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("config connection lock poisoned"))
    }

    /// Get a setting by key.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let value = conn
            .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Set a setting (upsert).
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// The stored endpoint override, if any.
    pub fn api_url(&self) -> Result<Option<String>> {
        self.get(API_URL_KEY)
    }

    pub fn set_api_url(&self, url: &str) -> Result<()> {
        self.set(API_URL_KEY, url)
    }
}

/// Pick the endpoint: CLI flag, then stored setting, then `default`.
pub fn resolve_api_url(flag: Option<&str>, stored: Option<String>, default: &str) -> String {
    flag.map(str::to_string)
        .or(stored)
        .unwrap_or_else(|| default.to_string())
}
