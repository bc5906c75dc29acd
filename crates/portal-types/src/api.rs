use serde::Serialize;

// -- Messages --

pub const MSG_REGISTERED: &str = "registration successful, please log in";
pub const MSG_LOGGED_IN: &str = "login successful";
pub const MSG_DUPLICATE_USERNAME: &str = "username already exists";
pub const MSG_INVALID_CREDENTIALS: &str = "username or password incorrect";
pub const MSG_MISSING_FIELDS: &str = "username and password are required";

// -- Outcomes --

/// What the front end shows after a register or login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

impl AuthOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
