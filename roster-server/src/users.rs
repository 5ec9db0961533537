use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use roster_core::UserStore;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The shared user store
#[derive(Debug, Clone)]
pub struct Users(pub Arc<RwLock<UserStore>>);

impl<State> FromRequestParts<State> for Users
where
    Arc<RwLock<UserStore>>: FromRef<State>,
    State: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &State,
    ) -> Result<Self, Self::Rejection> {
        let users = FromRef::from_ref(state);

        Ok(Self(users))
    }
}
