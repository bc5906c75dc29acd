use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as persisted in the user table.
///
/// The secret is stored and compared verbatim. This is not safe for real
/// deployments: production use needs a salted password hash, which would
/// change the persisted record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    /// Older tables call this field `passwordHash` even though it never held a hash.
    #[serde(alias = "passwordHash")]
    pub credential_secret: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(username: impl Into<String>, secret: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            credential_secret: secret.into(),
            created_at,
        }
    }

    pub fn secret_matches(&self, secret: &str) -> bool {
        self.credential_secret == secret
    }
}

/// Username -> record. Persisted as one JSON object.
pub type UserTable = HashMap<String, UserRecord>;
