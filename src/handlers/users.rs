use crate::core::error::{ApiError, ValidationError};
use crate::core::state::AppState;
use crate::models::user::UserPayload;
use crate::validation::payload::{validate_user_payload, ValidatedUser};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Unwrap the JSON body and check the required fields
fn validated_body(
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<ValidatedUser, ValidationError> {
    let Json(payload) = payload.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
    validate_user_payload(payload)
}

/// List all users
///
/// GET /users
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let users = state.store.list()?;

    Ok((StatusCode::OK, Json(users)).into_response())
}

/// Fetch a single user
///
/// GET /users/{id}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.store.get_by_id(&id)? {
        Some(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        None => {
            warn!(user_id = %id, "User not found");
            Err(ApiError::NotFound)
        }
    }
}

/// Create a user with a generated id
///
/// POST /users
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = validated_body(payload).map_err(|e| {
        warn!(error = %e, "Rejected user create");
        ApiError::from(e)
    })?;

    let user = state.store.create(&input.name, &input.bio)?;

    info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

/// Replace name and bio of an existing user
///
/// PUT /users/{id}
///
/// An unknown id is reported before any problem with the body.
pub async fn update_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    if state.store.get_by_id(&id)?.is_none() {
        warn!(user_id = %id, "User not found");
        return Err(ApiError::NotFound);
    }

    let input = validated_body(payload).map_err(|e| {
        warn!(user_id = %id, error = %e, "Rejected user update");
        ApiError::from(e)
    })?;

    // Deleted between the existence check and the update
    let user = state
        .store
        .update(&id, &input.name, &input.bio)?
        .ok_or(ApiError::NotFound)?;

    info!(user_id = %user.id, "User updated");

    Ok((StatusCode::OK, Json(user)).into_response())
}

/// Remove a user
///
/// DELETE /users/{id}
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.store.delete(&id)? {
        Some(user) => {
            info!(user_id = %user.id, "User deleted");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        None => {
            warn!(user_id = %id, "User not found");
            Err(ApiError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::models::user::User;
    use crate::utils::id::SequentialIdGenerator;
    use axum::body::Body;
    use http_body_util::BodyExt;

    fn create_test_state() -> Arc<AppState> {
        let ids = Arc::new(SequentialIdGenerator::new("u"));
        Arc::new(AppState::with_id_generator(Config::default(), ids))
    }

    fn payload(name: &str, bio: &str) -> Result<Json<UserPayload>, JsonRejection> {
        Ok(Json(UserPayload {
            name: Some(name.to_string()),
            bio: Some(bio.to_string()),
        }))
    }

    async fn read_user(response: Response) -> User {
        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_empty() {
        let state = create_test_state();

        let response = list_users_handler(State(state)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        let users: Vec<User> = serde_json::from_slice(&bytes).unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_create_success() {
        let state = create_test_state();

        let body = payload("Jane Doe", "Not Tarzan's Wife");
        let response = create_user_handler(State(state.clone()), body).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let user = read_user(response).await;
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "Jane Doe");

        // Verify user was stored
        assert_eq!(state.store.get_by_id("u1").unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_create_empty_name() {
        let state = create_test_state();

        let result = create_user_handler(State(state.clone()), payload("", "x")).await;
        assert!(result.is_err());
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert!(state.store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_create_missing_bio() {
        let state = create_test_state();
        let body = Ok(Json(UserPayload {
            name: Some("Jane".to_string()),
            bio: None,
        }));

        let result = create_user_handler(State(state.clone()), body).await;
        assert!(matches!(result, Err(ApiError::InvalidPayload(_))));
        assert!(state.store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let state = create_test_state();

        let result = get_user_handler(State(state), Path("missing".to_string())).await;
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_success() {
        let state = create_test_state();
        let created = state.store.create("Jane", "old").unwrap();

        let response = update_user_handler(
            State(state.clone()),
            Path(created.id.clone()),
            payload("Janet", "new"),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let user = read_user(response).await;
        assert_eq!(user, User::new(created.id, "Janet", "new"));
    }

    #[tokio::test]
    async fn test_update_missing_id_with_invalid_body() {
        let state = create_test_state();

        let result =
            update_user_handler(State(state), Path("missing".to_string()), payload("", "")).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_invalid_body() {
        let state = create_test_state();
        let created = state.store.create("Jane", "old").unwrap();

        let id = Path(created.id.clone());
        let result = update_user_handler(State(state.clone()), id, payload("Jane", " ")).await;
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Record left untouched
        assert_eq!(state.store.get_by_id(&created.id).unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_delete_success_then_not_found() {
        let state = create_test_state();
        let created = state.store.create("Jane", "bio").unwrap();

        let response = delete_user_handler(State(state.clone()), Path(created.id.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());

        let result = delete_user_handler(State(state), Path(created.id)).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }
}
