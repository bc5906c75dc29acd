use portal_types::api::{AuthOutcome, MSG_DUPLICATE_USERNAME, MSG_INVALID_CREDENTIALS};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username already exists")]
    DuplicateUsername,

    /// Unknown user and wrong secret are deliberately indistinguishable.
    #[error("username or password incorrect")]
    InvalidCredentials,

    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("user table is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl AuthError {
    /// True for expected outcomes the user should see, false for
    /// infrastructure failures the caller should propagate.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::DuplicateUsername | Self::InvalidCredentials)
    }

    /// Converts a rejection into the message shown on the form.
    /// Infrastructure failures are handed back unchanged.
    pub fn into_outcome(self) -> Result<AuthOutcome, AuthError> {
        match self {
            Self::DuplicateUsername => Ok(AuthOutcome::rejected(MSG_DUPLICATE_USERNAME)),
            Self::InvalidCredentials => Ok(AuthOutcome::rejected(MSG_INVALID_CREDENTIALS)),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_become_outcomes() {
        let outcome = AuthError::InvalidCredentials.into_outcome().unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, MSG_INVALID_CREDENTIALS);
        assert_eq!(AuthError::DuplicateUsername.to_string(), MSG_DUPLICATE_USERNAME);
    }

    #[test]
    fn storage_failures_pass_through() {
        let err = AuthError::Storage(anyhow::anyhow!("disk full"));
        assert!(!err.is_rejection());
        assert!(matches!(err.into_outcome(), Err(AuthError::Storage(_))));
    }
}
