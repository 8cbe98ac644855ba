//! Account records backing the write-gating capability check.
//!
//! # Responsibility
//! - Define the stored account shape and the opaque session handle callers
//!   pass to the capability check.
//!
//! # Invariants
//! - `username` is the store key and never changes.
//! - The event core reads nothing from an account beyond `is_admin`; login
//!   flows and session cookies belong to the handler layer.

use serde::Serialize;

/// Stored account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Store key and login name.
    pub username: String,
    /// Contact address captured at registration.
    pub email: String,
    /// Hex digest of the salted password; never serialized outward.
    #[serde(skip_serializing)]
    pub password_digest: String,
    /// Grants access to the event write path.
    pub is_admin: bool,
}

/// Opaque caller identity handed to the capability check.
///
/// Mirrors whatever session mechanism the handler layer uses; the core only
/// cares which account, if any, the caller is signed in as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Username of the signed-in account, when any.
    pub user_id: Option<String>,
}

impl Session {
    /// Session for a caller who has not signed in.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// Session for a caller signed in under `username`.
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            user_id: Some(username.into()),
        }
    }
}

/// Raw registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
