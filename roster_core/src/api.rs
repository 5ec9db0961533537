//! What the server and its callers agree on: where each endpoint lives,
//! what it accepts and returns, and the exact messages it reports.

/// The shape of a failed request.
pub mod error;

/// Log in as a registered user.
pub mod login;

/// Register a new user.
pub mod register;

/// Check the server version.
pub mod version;
