//! Scoped SQLite connection wrapper (lightweight for CLI usage).
//!
//! Each command opens one `DbPool`, runs its statements and drops it on
//! every exit path, failure included. There is no pooling and no shared
//! state across calls beyond the database file itself.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
