//! Credential store and login flow.
//!
//! Secrets are kept in plaintext and compared verbatim. Do not point this at
//! real passwords.

pub mod controller;
pub mod error;
pub mod store;

pub use controller::Controller;
pub use error::AuthError;
pub use store::CredentialStore;
