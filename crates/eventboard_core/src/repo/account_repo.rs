//! Account repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the username→credential/role mapping the capability check
//!   consults.
//!
//! # Invariants
//! - `username` is the primary key; registration never overwrites an
//!   existing account.

use crate::model::account::Account;
use crate::repo::event_repo::{RepoError, RepoResult};
use crate::repo::{ensure_schema_version, ensure_table};
use rusqlite::{params, Connection};

/// Repository interface for account lookups and registration inserts.
pub trait AccountRepository {
    /// Gets one account by username. A miss is `Ok(None)`, not an error.
    fn get_account(&self, username: &str) -> RepoResult<Option<Account>>;
    /// Inserts a new account; fails if the username is already taken.
    fn insert_account(&mut self, account: &Account) -> RepoResult<()>;
}

/// SQLite-backed account repository.
pub struct SqliteAccountRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteAccountRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_schema_version(conn)?;
        ensure_table(
            conn,
            "accounts",
            &["username", "email", "password_digest", "is_admin"],
        )?;
        Ok(Self { conn })
    }
}

impl AccountRepository for SqliteAccountRepository<'_> {
    fn get_account(&self, username: &str) -> RepoResult<Option<Account>> {
        let mut stmt = self.conn.prepare(
            "SELECT username, email, password_digest, is_admin
             FROM accounts
             WHERE username = ?1;",
        )?;

        let mut rows = stmt.query([username])?;
        if let Some(row) = rows.next()? {
            let is_admin = match row.get::<_, i64>("is_admin")? {
                0 => false,
                1 => true,
                other => {
                    return Err(RepoError::InvalidData(format!(
                        "invalid is_admin value `{other}` in accounts.is_admin"
                    )));
                }
            };
            return Ok(Some(Account {
                username: row.get("username")?,
                email: row.get("email")?,
                password_digest: row.get("password_digest")?,
                is_admin,
            }));
        }

        Ok(None)
    }

    fn insert_account(&mut self, account: &Account) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO accounts (username, email, password_digest, is_admin)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                account.username.as_str(),
                account.email.as_str(),
                account.password_digest.as_str(),
                i64::from(account.is_admin),
            ],
        )?;
        Ok(())
    }
}
