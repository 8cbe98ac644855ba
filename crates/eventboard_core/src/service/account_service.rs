//! Account use-case service: registration, login, capability check.
//!
//! # Responsibility
//! - Enforce registration rules with collected messages.
//! - Answer the single question the event write path cares about: is this
//!   session allowed to mutate the store.
//!
//! # Invariants
//! - Registration never creates admin accounts.
//! - `is_authorized` is false for anonymous sessions and for accounts
//!   without the admin flag.
//! - Stored credentials are digests; plain passwords never leave this
//!   module's call frames.

use crate::model::account::{Account, RegisterRequest, Session};
use crate::repo::account_repo::AccountRepository;
use crate::repo::event_repo::RepoError;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

const USERNAME_MIN_CHARS: usize = 3;
const PASSWORD_MIN_CHARS: usize = 6;

/// Collected registration failures, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub messages: Vec<String>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Display for RegisterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.messages.is_empty() {
            return write!(f, "no registration errors");
        }
        write!(f, "{}", self.messages.join("; "))
    }
}

impl Error for RegisterErrors {}

/// Service error for account use-cases.
#[derive(Debug)]
pub enum AccountServiceError {
    /// Registration input violated one or more rules.
    Registration(RegisterErrors),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for AccountServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registration(errors) => write!(f, "{errors}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AccountServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registration(errors) => Some(errors),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for AccountServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Account service facade over a repository implementation.
pub struct AccountService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new non-admin account.
    ///
    /// # Errors
    /// - Returns every violated rule's message; registration never stops at
    ///   the first failure.
    pub fn register(
        &mut self,
        request: &RegisterRequest,
    ) -> Result<Account, AccountServiceError> {
        let username = request.username.trim();
        let email = request.email.trim();

        let mut errors = RegisterErrors::default();
        if username.chars().count() < USERNAME_MIN_CHARS {
            errors
                .messages
                .push("Username must be at least 3 characters".to_string());
        }
        if self.repo.get_account(username)?.is_some() {
            errors.messages.push("Username already taken".to_string());
        }
        if !EMAIL_RE.is_match(email) {
            errors
                .messages
                .push("Please enter a valid email address".to_string());
        }
        if request.password.chars().count() < PASSWORD_MIN_CHARS {
            errors
                .messages
                .push("Password must be at least 6 characters".to_string());
        }
        if request.password != request.confirm_password {
            errors.messages.push("Passwords do not match".to_string());
        }

        if !errors.is_empty() {
            return Err(AccountServiceError::Registration(errors));
        }

        let account = Account {
            username: username.to_string(),
            email: email.to_string(),
            password_digest: password_digest(username, &request.password),
            is_admin: false,
        };
        self.repo.insert_account(&account)?;
        Ok(account)
    }

    /// Verifies credentials and returns a signed-in session on success.
    pub fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Session>, AccountServiceError> {
        let Some(account) = self.repo.get_account(username)? else {
            return Ok(None);
        };
        if account.password_digest != password_digest(&account.username, password) {
            return Ok(None);
        }
        Ok(Some(Session::signed_in(account.username)))
    }

    /// Returns whether the session may invoke the event write path.
    ///
    /// True only when the session names an existing account carrying the
    /// admin flag.
    pub fn is_authorized(&self, session: &Session) -> Result<bool, AccountServiceError> {
        let Some(user_id) = session.user_id.as_deref() else {
            return Ok(false);
        };
        Ok(self
            .repo
            .get_account(user_id)?
            .map_or(false, |account| account.is_admin))
    }
}

/// Hex digest stored for an account's password.
///
/// The username salts the input so equal passwords do not share digests.
/// This is a stable storage boundary, not a key-derivation scheme; the
/// listing site's only real gate is the admin flag.
pub fn password_digest(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
