//! SQLite connection and migrations.

use crate::error::AppError;
use crate::infra::seed::{seed_initial_data, InitialData, SeedReport};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

const MIGRATIONS: &[(i32, &str)] = &[(1, include_str!("../../migrations/0001_init.sql"))];

/// Handle to the database file. Holds no open connection: every operation
/// opens its own through [`Database::connect`] and drops it when done.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection with foreign keys enforced.
    pub fn connect(&self) -> Result<Connection, AppError> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }

    /// Seed reference data. Safe to call on every startup.
    pub fn seed(&self, data: &InitialData) -> Result<SeedReport, AppError> {
        let mut conn = self.connect()?;
        seed_initial_data(&mut conn, data)
    }
}

/// Initialize DB at path, run migrations, return the handle.
pub fn init_db(db_path: &Path) -> Result<Database, AppError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let db = Database {
        path: db_path.to_path_buf(),
    };
    let mut conn = db.connect()?;
    run_migrations(&mut conn)?;
    log::debug!("schema ready at {:?}", db_path);
    Ok(db)
}

fn run_migrations(conn: &mut Connection) -> Result<(), AppError> {
    let tx = conn.transaction()?;

    // Ensure schema_migrations exists (first run)
    tx.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT (datetime('now')))",
        [],
    )?;

    let applied: Vec<i32> = tx
        .prepare("SELECT version FROM schema_migrations ORDER BY version")?
        .query_map([], |r| r.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    for (version, sql) in MIGRATIONS {
        if applied.contains(version) {
            continue;
        }
        log::info!("applying migration {}", version);
        let statements = sql.split(';').map(|s| s.trim()).filter(|s| !s.is_empty());
        for stmt in statements {
            tx.execute(stmt, [])?;
        }
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, datetime('now'))",
            [version],
        )?;
    }

    tx.commit()?;
    Ok(())
}
