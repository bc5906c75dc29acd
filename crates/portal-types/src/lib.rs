//! Shared types for the portal login flow.
//!
//! Kept free of storage and I/O so both the credential store and the
//! terminal front end can depend on it.

pub mod api;
pub mod models;
pub mod view;
