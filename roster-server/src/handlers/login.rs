use crate::error::Error;
use crate::users::Users;
use axum::Json;
use roster_core::api::login;
use roster_core::{validate, ValidationError};

#[tracing::instrument]
pub async fn handler(
    Users(users): Users,
    Json(req): Json<login::Req>,
) -> Result<Json<login::Resp>, Error> {
    let users = users.read().await;

    let errors = validate::check(&req, login::CHECKS, &users);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    // The checks above guarantee the position parses and is occupied.
    let record = login::user_id(&req)
        .and_then(|position| users.get(position))
        .cloned()
        .ok_or_else(|| {
            Error::Validation(vec![ValidationError::new(login::FIELD, login::NO_SUCH_USER)])
        })?;

    Ok(Json(record))
}
