use crate::models::user::MessageResponse;
use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

pub async fn fallback_handler(method: Method, uri: Uri) -> Response {
    debug!(method = %method, path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: "Route not found".to_string(),
        }),
    )
        .into_response()
}
