// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{fallback, health, root, users};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Routes for the user collection, relative to the API prefix
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users",
            get(users::list_users_handler).post(users::create_user_handler),
        )
        .route(
            "/users/{id}",
            get(users::get_user_handler)
                .put(users::update_user_handler)
                .delete(users::delete_user_handler),
        )
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let prefix = state.config.api.prefix.clone();

    let router = Router::new()
        .route("/", get(root::root_handler))
        .route("/health", get(health::health_handler));

    // nest() rejects an empty path, so the default prefix merges instead
    let router = if prefix.is_empty() {
        router.merge(user_routes())
    } else {
        router.nest(&prefix, user_routes())
    };

    router
        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)
        .with_state(state)
}
