use axum::extract::FromRef;
use roster_core::UserStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state needed by requests.
#[derive(Clone, Default, FromRef)]
pub struct State {
    /// Every registered user, in registration order.
    users: Arc<RwLock<UserStore>>,
}
