use axum::Json;
use roster_core::api::version;

#[tracing::instrument]
pub async fn handler() -> Json<version::Resp> {
    Json(version::Resp {
        version: version::VERSION.to_string(),
    })
}
