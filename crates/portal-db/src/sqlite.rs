use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

use crate::{KeyValueStore, migrations};

/// Durable key-value store backed by a single SQLite table.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        migrations::run(&conn)?;

        info!("Key-value store opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().map_err(|e| anyhow::anyhow!("DB lock poisoned: {}", e))?;
        f(&conn)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            let value = conn
                .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
                .optional()?;
            debug!(key, found = value.is_some(), "kv get");
            Ok(value)
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
                (key, value),
            )?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_db_path() -> PathBuf {
        std::env::temp_dir().join(format!("portal-kv-{}.db", uuid::Uuid::new_v4()))
    }

    fn cleanup(path: &Path) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
        }
    }

    #[test]
    fn upsert_overwrites() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("app_users", "{}").unwrap();
        store.set("app_users", r#"{"a":1}"#).unwrap();
        assert_eq!(store.get("app_users").unwrap().as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.remove("nothing").unwrap();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn survives_reopen() {
        let path = temp_db_path();
        {
            let store = SqliteStore::open(&path).unwrap();
            store.set("app_current_user", "alice").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get("app_current_user").unwrap().as_deref(), Some("alice"));
        store.remove("app_current_user").unwrap();
        assert_eq!(store.get("app_current_user").unwrap(), None);

        drop(store);
        cleanup(&path);
    }
}
