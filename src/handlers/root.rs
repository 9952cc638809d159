use crate::core::state::AppState;
use crate::models::user::MessageResponse;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// Landing banner
///
/// GET /
pub async fn root_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: state.config.api.banner.clone(),
        }),
    )
}
