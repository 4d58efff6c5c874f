//! SQLite connection wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            // a missing folder is reported by `open` below
            let _ = std::fs::create_dir_all(parent);
        }
        let conn = Connection::open(Path::new(path))?;
        // the session watch thread holds a second connection
        conn.busy_timeout(Duration::from_secs(2))?;
        Ok(Self { conn })
    }
}
