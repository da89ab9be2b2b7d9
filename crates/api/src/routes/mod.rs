pub mod docs;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies          list (search), create
/// /movies/{id}     get, update, delete
/// /openapi.json    generated API document
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(docs::router())
}
