//! Request extractors that reject with [`AppError`].
//!
//! Axum's built-in rejections answer with plain-text bodies and a mix of
//! 400/415/422 statuses. Every malformed client input here is a validation
//! failure, so these wrappers funnel all of them into 422 with the standard
//! JSON error body.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use movies_core::movie::parse_movie_id;
use movies_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A `{id}` path segment that is a positive integer.
///
/// `None` means the segment is a positive integer beyond the [`DbId`] range;
/// it is well-formed but can never match a stored movie.
///
/// ```ignore
/// async fn get_movie(MovieId(id): MovieId) -> AppResult<Json<Movie>> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MovieId(pub Option<DbId>);

impl<S> FromRequestParts<S> for MovieId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(MovieId(parse_movie_id(&raw)?))
    }
}

/// JSON body extractor whose rejection is a 422 [`AppError`].
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::validation(rejection.body_text()))?;
        Ok(AppJson(value))
    }
}

/// Query-string extractor whose rejection is a 422 [`AppError`].
#[derive(Debug)]
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| AppError::validation(rejection.body_text()))?;
        Ok(AppQuery(value))
    }
}
