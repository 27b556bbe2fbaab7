use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// Key-value store backing the portal's durable state. Holds the serialized
/// session plus the cached profile images; everything else the portal shows
/// is transient.
pub struct Kv {
    conn: Connection,
    path: PathBuf,
}

impl Kv {
    pub fn open(dir: &Path) -> anyhow::Result<Kv> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join("eduportal.sqlite3");
        let conn = Connection::open(&path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv(
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Kv { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?", [key], |r| r.get(0))
            .optional()
            .map_err(Into::into)
    }

    pub fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv(key, value) VALUES(?, ?)",
            (key, value),
        )?;
        Ok(())
    }

    pub fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?", [key])?;
        Ok(())
    }
}
