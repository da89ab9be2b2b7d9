use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// GET /openapi.json -- the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Mount API documentation routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}
