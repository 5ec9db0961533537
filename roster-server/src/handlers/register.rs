use crate::error::Error;
use crate::users::Users;
use axum::Json;
use roster_core::api::register;
use roster_core::validate;

#[tracing::instrument]
pub async fn handler(
    Users(users): Users,
    Json(req): Json<register::Req>,
) -> Result<Json<register::Resp>, Error> {
    // Validation and the append share one write lock so the assigned
    // position is settled before anyone else can register.
    let mut users = users.write().await;

    let errors = validate::check(&req, register::CHECKS, &users);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let position = users.insert(req.clone());
    tracing::debug!(position, "registered a new user");

    Ok(Json(req))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::handlers::test::{record, users_with};
    use roster_core::{Record, ValidationError};
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn test_success() {
        let users = users_with(&[]);

        let resp = handler(users.clone(), Json(record("JoshMatz")))
            .await
            .unwrap();

        assert_eq!(resp.0.get("name"), Some(&json!("JoshMatz")));
        assert_eq!(users.0.read().await.len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_stores_the_whole_record() {
        let users = users_with(&[]);

        let mut req = record("JoshMatz");
        req.insert("favorite".to_string(), json!("tea"));

        let resp = handler(users.clone(), Json(req.clone())).await.unwrap();

        assert_eq!(resp.0, req);
        assert_eq!(users.0.read().await.get(0), Some(&req));
    }

    #[test_log::test(tokio::test)]
    async fn test_assigns_the_next_position() {
        let users = users_with(&["Ada"]);

        handler(users.clone(), Json(record("Grace"))).await.unwrap();

        assert_eq!(users.0.read().await.get(1), Some(&record("Grace")));
    }

    #[test_log::test(tokio::test)]
    async fn test_short_name() {
        let users = users_with(&[]);

        let errors = handler(users.clone(), Json(record("J")))
            .await
            .unwrap_err()
            .unwrap_validation();

        assert_eq!(
            errors,
            vec![ValidationError::new("name", register::NAME_BAD_LENGTH)]
        );
        assert!(users.0.read().await.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_symbolic_name() {
        let users = users_with(&[]);

        let errors = handler(users.clone(), Json(record("J0$#")))
            .await
            .unwrap_err()
            .unwrap_validation();

        assert_eq!(
            errors,
            vec![ValidationError::new("name", register::NAME_NOT_ALPHABETIC)]
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_missing_name() {
        let users = users_with(&[]);

        let errors = handler(users.clone(), Json(Record::new()))
            .await
            .unwrap_err()
            .unwrap_validation();

        assert_eq!(
            errors,
            vec![
                ValidationError::new("name", register::NAME_NOT_ALPHABETIC),
                ValidationError::new("name", register::NAME_BAD_LENGTH),
            ]
        );
        assert!(users.0.read().await.is_empty());
    }
}
