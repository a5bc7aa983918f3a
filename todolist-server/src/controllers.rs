use axum::{extract::Extension, Json};
use std::sync::Arc;
use todolist_core::UserModel;

use crate::AppState;

/// Handler per POST /user/
///
/// Il body viene deserializzato dall'estrattore `Json`: se manca il Content-Type,
/// se il JSON non è valido o se i tipi non tornano, axum risponde con il suo rifiuto
/// di default (415 / 400 / 422) e questo codice non viene eseguito.
/// Ritorna `()` -> 200 OK con body vuoto.
#[tracing::instrument(name = "create_user", skip_all)]
pub async fn create(
    Extension(state): Extension<Arc<AppState>>,
    Json(user): Json<UserModel>,
) {
    tracing::debug!(has_username = user.username.is_some(), "received user");
    state.sink.emit(user.username());
}
