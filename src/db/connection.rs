use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".train-departures";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "departures.sqlite";

/// Where the departures database lives. The path is resolved once at startup
/// and handed to the repository, so tests can point it at a scratch directory
/// instead of the real home-directory store.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub db_path: PathBuf,
}

impl StorageConfig {
    /// Config pointing at an explicit database file.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Resolve the default location inside the user's home directory.
    pub fn from_home() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::new(
            base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME),
        ))
    }
}

/// Open a connection to the configured database file, creating the parent
/// directory on first use. `PRAGMA foreign_keys = ON` is toggled on every
/// connection so the referential check between departures and types behaves
/// the same during tests and production runs.
pub(crate) fn open_connection(config: &StorageConfig) -> Result<Connection> {
    if let Some(parent) = config.db_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(&config.db_path).context("failed to open SQLite database")?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign keys")?;

    Ok(conn)
}

/// Create both tables if they do not exist yet. Safe to run on every startup;
/// an already-initialized database passes through untouched. The table and
/// column names are the on-disk contract shared with earlier versions of the
/// tool, so they stay as-is.
pub(crate) fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS types (
            type_id INTEGER PRIMARY KEY AUTOINCREMENT,
            train_type TEXT NOT NULL
        )",
        [],
    )
    .context("failed to create types table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS departures (
            departure_id INTEGER PRIMARY KEY AUTOINCREMENT,
            train_number INTEGER NOT NULL,
            destination TEXT NOT NULL,
            type_id INTEGER NOT NULL,
            time TEXT NOT NULL,
            FOREIGN KEY(type_id) REFERENCES types(type_id)
        )",
        [],
    )
    .context("failed to create departures table")?;

    Ok(())
}
