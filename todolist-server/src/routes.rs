use axum::{routing::post, Extension, Router};
use std::sync::Arc;

use crate::controllers;
use crate::AppState;

/// Unica rotta esposta: POST /user/ (con lo slash finale, "/user" risponde 404).
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/user/", post(controllers::create))
        .layer(Extension(state))
}
