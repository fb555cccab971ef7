//! Database migrations
//!
//! Manages database schema versioning. Each migration runs once, in order,
//! and the applied version is recorded in `schema_version`.
//!
//! ## Adding New Migrations
//!
//! 1. Increment `SCHEMA_VERSION`
//! 2. Add a new `migrate_vX` function
//! 3. Call it from `run_migrations`

use rusqlite::Connection;
use tracing::{debug, error, info};

use super::connection::DatabaseError;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_schema_version(conn)?;

    if current_version < SCHEMA_VERSION {
        info!(
            from_version = current_version,
            to_version = SCHEMA_VERSION,
            "Running database migrations"
        );

        if current_version < 1 {
            if let Err(e) = migrate_v1(conn) {
                error!(
                    version = 1,
                    error = %e,
                    "Migration V001 (weather records) failed"
                );
                return Err(e);
            }
        }

        set_schema_version(conn, SCHEMA_VERSION)?;
        info!(version = SCHEMA_VERSION, "Database migrations complete");
    } else {
        debug!(version = current_version, "Database schema is up to date");
    }

    Ok(())
}

/// Get current schema version
fn get_schema_version(conn: &Connection) -> Result<i32, DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;

    Ok(version)
}

/// Set schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Migration to version 1: weather record documents
///
/// Coordinates are REAL columns so lookups compare IEEE-754 doubles exactly.
/// The pair index is not unique; concurrent misses may store duplicates.
fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Applying migration V001: Weather records");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS weather_records (
            id TEXT PRIMARY KEY NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            temperature REAL NOT NULL,
            wind_speed REAL NOT NULL,
            wind_direction INTEGER NOT NULL,
            sunrise TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_weather_records_coordinates
            ON weather_records(latitude, longitude);
        ",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn run_migrations_creates_tables() {
        let conn = create_test_connection();
        run_migrations(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert!(tables.contains(&"weather_records".to_string()));
        assert!(tables.contains(&"schema_version".to_string()));
    }

    #[test]
    fn run_migrations_creates_coordinate_index() {
        let conn = create_test_connection();
        run_migrations(&conn).unwrap();

        let index: String = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type='index' AND tbl_name='weather_records'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(index, "idx_weather_records_coordinates");
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = create_test_connection();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap(); // Should not fail
    }

    #[test]
    fn schema_version_tracked() {
        let conn = create_test_connection();
        run_migrations(&conn).unwrap();

        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn duplicate_coordinates_are_allowed() {
        let conn = create_test_connection();
        run_migrations(&conn).unwrap();

        for id in ["a", "b"] {
            conn.execute(
                "INSERT INTO weather_records
                 (id, latitude, longitude, temperature, wind_speed, wind_direction, sunrise, created_at)
                 VALUES (?1, 1.5, 2.5, 20.0, 3.0, 90, '2024-06-01T05:30', '2024-06-01T00:00:00Z')",
                [id],
            )
            .unwrap();
        }

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM weather_records", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }
}
