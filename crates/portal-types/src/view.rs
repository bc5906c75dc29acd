use std::fmt;

use serde::{Deserialize, Serialize};

/// Which screen the front end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewState {
    #[default]
    Login,
    Register,
    Home,
}

impl ViewState {
    /// Login <-> Register. Home has no form to switch.
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
            Self::Home => Self::Home,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create an account",
            Self::Home => "Welcome back",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "LOGIN"),
            Self::Register => write!(f, "REGISTER"),
            Self::Home => write!(f, "HOME"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_only_switches_forms() {
        assert_eq!(ViewState::Login.toggled(), ViewState::Register);
        assert_eq!(ViewState::Register.toggled(), ViewState::Login);
        assert_eq!(ViewState::Home.toggled(), ViewState::Home);
    }

    #[test]
    fn serializes_as_upper_case() {
        assert_eq!(serde_json::to_string(&ViewState::Register).unwrap(), "\"REGISTER\"");
        assert_eq!(ViewState::default(), ViewState::Login);
    }
}
