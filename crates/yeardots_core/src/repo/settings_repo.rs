//! Key-value settings repository.
//!
//! # Responsibility
//! - Persist small app-level flags (currently only onboarding completion).
//! - Keep SQL details behind the `SettingsRepository` trait.
//!
//! # Invariants
//! - Keys are non-empty after trimming.
//! - `set` is an upsert; the last write wins.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Settings persistence errors.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidKey(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "settings key is invalid: `{key}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key-value store.
pub trait SettingsRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> RepoResult<()>;
    fn remove(&self, key: &str) -> RepoResult<bool>;
}

/// SQLite-backed settings repository over `app_settings`.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let key = normalize_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_settings WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.conn.execute(
            "INSERT INTO app_settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<bool> {
        let key = normalize_key(key)?;
        let changed = self
            .conn
            .execute("DELETE FROM app_settings WHERE key = ?1;", [key])?;
        Ok(changed > 0)
    }
}

fn normalize_key(key: &str) -> RepoResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(RepoError::InvalidKey(key.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{RepoError, SettingsRepository, SqliteSettingsRepository};
    use crate::db::open_db_in_memory;

    #[test]
    fn set_then_get_and_overwrite() {
        let conn = open_db_in_memory().expect("open db");
        let repo = SqliteSettingsRepository::new(&conn);

        assert_eq!(repo.get("theme").expect("get"), None);
        repo.set("theme", "dark").expect("set");
        repo.set("theme", "light").expect("overwrite");
        assert_eq!(repo.get("theme").expect("get").as_deref(), Some("light"));
    }

    #[test]
    fn remove_reports_whether_key_existed() {
        let conn = open_db_in_memory().expect("open db");
        let repo = SqliteSettingsRepository::new(&conn);

        repo.set("k", "v").expect("set");
        assert!(repo.remove("k").expect("remove"));
        assert!(!repo.remove("k").expect("second remove"));
    }

    #[test]
    fn blank_key_is_rejected() {
        let conn = open_db_in_memory().expect("open db");
        let repo = SqliteSettingsRepository::new(&conn);

        let err = repo.get("   ").expect_err("blank key must fail");
        assert!(matches!(err, RepoError::InvalidKey(_)));
    }
}
