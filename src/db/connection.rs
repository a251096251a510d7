use rusqlite::Connection;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::errors::DataSourceError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

// Thread-local connection slot, remembered together with the path it was opened for.
thread_local! {
    static DB_CONN: RefCell<Option<(PathBuf, Connection)>> = const { RefCell::new(None) };
}

/// Handle to the SQLite file holding the headcount source rows.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens (or reuses) this thread's connection and runs `f` with it.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, DataSourceError>
    where
        F: FnOnce(&mut Connection) -> Result<T, DataSourceError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let reusable = matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if !reusable {
                    let conn = Connection::open(&self.path)?;
                    *slot = Some((self.path.clone(), conn));
                }
                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(DataSourceError::Unavailable(
                        "connection slot is empty".to_string(),
                    )),
                }
            })
            .map_err(|_| DataSourceError::Unavailable("connection slot destroyed".to_string()))?
    }
}

/// Creates the source table if it does not exist yet.
pub fn init_db(db: &Database) -> Result<(), DataSourceError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    })?;

    tracing::info!("Database schema ready at {}", db.path().display());
    Ok(())
}
