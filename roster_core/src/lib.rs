//! Core types for the roster service: the in-memory user store, the
//! validation engine, and the wire contract for each endpoint.

/// The wire contract, one module per endpoint.
pub mod api;

/// The in-memory list of registered users.
pub mod store;
pub use store::{Record, UserStore};

/// Request validation.
pub mod validate;
pub use validate::{Rule, ValidationError};
