//! Persisted client state: a small key/value table standing in for the
//! browser's local storage, plus access to the local journal.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::{Session, UserProfile};
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use tracing::warn;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const USER_INFO_KEY: &str = "user_info";

pub struct LocalStore {
    pool: DbPool,
}

impl LocalStore {
    /// Open (and migrate if needed) the store at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Drop every persisted key. The journal is kept.
    pub fn clear(&self) -> AppResult<()> {
        self.pool.conn.execute("DELETE FROM kv", [])?;
        Ok(())
    }

    /// Read `{auth_token, user_info}`. A malformed profile counts as absent.
    pub fn session(&self) -> AppResult<Option<Session>> {
        let token = match self.get(AUTH_TOKEN_KEY)? {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Ok(None),
        };

        let user = match self.get(USER_INFO_KEY)? {
            Some(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(u) => u,
                Err(e) => {
                    warn!("ignoring malformed user_info: {e}");
                    return Ok(None);
                }
            },
            None => return Ok(None),
        };

        Ok(Some(Session { token, user }))
    }

    pub fn save_session(&self, session: &Session) -> AppResult<()> {
        self.set(AUTH_TOKEN_KEY, &session.token)?;
        self.set(USER_INFO_KEY, &serde_json::to_string(&session.user)?)?;
        Ok(())
    }

    /// Append to the local journal. Failures are reported, never fatal.
    pub fn journal(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warn!("failed to write internal log: {e}");
        }
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}
