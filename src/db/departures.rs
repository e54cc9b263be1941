use anyhow::{Context, Result as AnyResult};
use rusqlite::{params, Connection, OptionalExtension};

use super::connection::{ensure_schema, open_connection, StorageConfig};
use crate::error::Result;
use crate::models::{DepartureRecord, TimeOfDay};

/// Columns shared by the `list` and `select` queries so both views hydrate
/// rows identically.
const JOINED_COLUMNS: &str = "SELECT d.train_number, t.train_type, d.destination, d.time
     FROM departures d
     INNER JOIN types t ON t.type_id = d.type_id";

/// Mediates every read and write against the departures store. The repository
/// holds only the configuration; each operation opens its own connection and
/// releases it on return, including error paths, so no file handle outlives a
/// single command.
pub struct Repository {
    config: StorageConfig,
}

impl Repository {
    /// Verify the database is reachable and both tables exist, then return a
    /// repository bound to that location. Startup is the one place where a
    /// storage failure is fatal, so this propagates `anyhow` directly.
    pub fn open(config: StorageConfig) -> AnyResult<Self> {
        let conn = open_connection(&config)?;
        ensure_schema(&conn)?;
        Ok(Self { config })
    }

    fn connect(&self) -> AnyResult<Connection> {
        open_connection(&self.config)
    }

    /// Retrieve every departure joined with its type name, in insertion order.
    /// Insertion order keeps repeated `list` invocations stable without
    /// implying any scheduling semantics.
    pub fn list_all(&self) -> Result<Vec<DepartureRecord>> {
        let conn = self.connect()?;
        let sql = format!("{JOINED_COLUMNS} ORDER BY d.departure_id");
        let mut stmt = conn
            .prepare(&sql)
            .context("failed to prepare departures query")?;

        let records = stmt
            .query_map([], hydrate_record)
            .context("failed to load departures")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("failed to collect departures")?;

        Ok(records)
    }

    /// Retrieve departures leaving strictly after the cutoff. An empty result
    /// is a normal outcome, not an error. The comparison runs on the stored
    /// zero-padded text, which orders identically to the typed value.
    pub fn select_after(&self, cutoff: TimeOfDay) -> Result<Vec<DepartureRecord>> {
        let conn = self.connect()?;
        let sql = format!("{JOINED_COLUMNS} WHERE d.time > ?1 ORDER BY d.departure_id");
        let mut stmt = conn
            .prepare(&sql)
            .context("failed to prepare filtered departures query")?;

        let records = stmt
            .query_map([cutoff], hydrate_record)
            .context("failed to load filtered departures")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("failed to collect filtered departures")?;

        Ok(records)
    }

    /// Record a new departure, creating its train type on first sight. The
    /// lookup-or-insert and the departure insert run inside one transaction so
    /// a failure partway through never leaves an orphaned type row.
    pub fn add(
        &self,
        destination: &str,
        number: i64,
        time: TimeOfDay,
        train_type: &str,
    ) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn
            .transaction()
            .context("failed to begin add transaction")?;

        let type_id = lookup_or_insert_type(&tx, train_type)?;
        tx.execute(
            "INSERT INTO departures (train_number, destination, type_id, time)
             VALUES (?1, ?2, ?3, ?4)",
            params![number, destination, type_id, time],
        )
        .context("failed to insert departure")?;

        tx.commit().context("failed to commit departure")?;
        Ok(())
    }
}

/// Resolve a train type name to its id, inserting the row when the name has
/// never been seen. Exact name match is the deduplication rule, so two
/// departures sharing a type leave a single `types` row behind.
fn lookup_or_insert_type(conn: &Connection, train_type: &str) -> AnyResult<i64> {
    let existing = conn
        .query_row(
            "SELECT type_id FROM types WHERE train_type = ?1",
            params![train_type],
            |row| row.get(0),
        )
        .optional()
        .context("failed to look up train type")?;

    if let Some(type_id) = existing {
        return Ok(type_id);
    }

    conn.execute(
        "INSERT INTO types (train_type) VALUES (?1)",
        params![train_type],
    )
    .context("failed to insert train type")?;

    Ok(conn.last_insert_rowid())
}

fn hydrate_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<DepartureRecord> {
    Ok(DepartureRecord {
        number: row.get(0)?,
        train_type: row.get(1)?,
        destination: row.get(2)?,
        time: row.get(3)?,
    })
}
