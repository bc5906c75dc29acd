use chrono::Utc;
use portal_db::KeyValueStore;
use portal_types::api::AuthOutcome;
use portal_types::models::{UserRecord, UserTable};
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// Key holding the JSON user table.
pub const USERS_KEY: &str = "app_users";
/// Key holding the bare username of the active session.
pub const CURRENT_USER_KEY: &str = "app_current_user";

/// Registration, login and session tracking over a key-value store.
///
/// Every mutation rewrites the whole user table. Two processes sharing one
/// backing store race on that write and the last one wins.
pub struct CredentialStore<S> {
    storage: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the full user table. A missing key is an empty table.
    pub fn users(&self) -> Result<UserTable, AuthError> {
        match self.storage.get(USERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(UserTable::new()),
        }
    }

    fn save_users(&self, users: &UserTable) -> Result<(), AuthError> {
        let raw = serde_json::to_string(users)?;
        self.storage.set(USERS_KEY, &raw)?;
        Ok(())
    }

    /// Creates a user. Fails without touching storage if the name is taken.
    pub fn register(&self, username: &str, secret: &str) -> Result<UserRecord, AuthError> {
        let mut users = self.users()?;
        if users.contains_key(username) {
            debug!(username, "Registration rejected: username taken");
            return Err(AuthError::DuplicateUsername);
        }

        let record = UserRecord::new(username, secret, Utc::now());
        users.insert(username.to_string(), record.clone());
        self.save_users(&users)?;

        info!(username, total_users = users.len(), "User registered");
        Ok(record)
    }

    /// Checks the secret verbatim and, on a match, makes `username` the active session.
    pub fn login(&self, username: &str, secret: &str) -> Result<(), AuthError> {
        let users = self.users()?;
        match users.get(username) {
            Some(user) if user.secret_matches(secret) => {}
            _ => {
                warn!(username, "Login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        }

        self.storage.set(CURRENT_USER_KEY, username)?;
        info!(username, "User logged in");
        Ok(())
    }

    /// Clears the session pointer. Safe to call with no active session.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove(CURRENT_USER_KEY)?;
        info!("Session cleared");
        Ok(())
    }

    /// The user named by the session pointer, if any.
    ///
    /// A pointer naming a user that is no longer in the table yields `None`
    /// and is left in place.
    pub fn current_user(&self) -> Result<Option<UserRecord>, AuthError> {
        let username = match self.storage.get(CURRENT_USER_KEY)? {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(None),
        };

        let mut users = self.users()?;
        let user = users.remove(&username);
        if user.is_none() {
            warn!(username = %username, "Session points at unknown user");
        }
        Ok(user)
    }

    pub fn register_outcome(&self, username: &str, secret: &str) -> Result<AuthOutcome, AuthError> {
        outcome(self.register(username, secret), portal_types::api::MSG_REGISTERED)
    }

    pub fn login_outcome(&self, username: &str, secret: &str) -> Result<AuthOutcome, AuthError> {
        outcome(self.login(username, secret), portal_types::api::MSG_LOGGED_IN)
    }
}

/// Folds an operation result into a form outcome, propagating storage failures.
pub fn outcome<T>(result: Result<T, AuthError>, success_message: &str) -> Result<AuthOutcome, AuthError> {
    match result {
        Ok(_) => Ok(AuthOutcome::ok(success_message)),
        Err(e) => e.into_outcome(),
    }
}
