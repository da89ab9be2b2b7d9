//! Handlers for the `/movies` resource.
//!
//! Request bodies are validated before the store is touched, so a rejected
//! request never mutates state.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie::{validate_create, CreateMovie, Movie, ENTITY_MOVIE};
use movies_core::types::DbId;
use movies_store::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery, MovieId};
use crate::query::MovieSearchParams;
use crate::state::AppState;

fn not_found(id: Option<DbId>) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_MOVIE,
        // Ids past the DbId range are reported at the range ceiling.
        id: id.unwrap_or(DbId::MAX),
    })
}

/// POST /movies
///
/// Register a new movie. Responds 201 with the stored record.
#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body = CreateMovie,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 422, description = "Invalid movie payload"),
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    let input = validate_create(input)?;
    let movie = MovieRepo::create(&state.store, input).await;

    tracing::info!(
        movie_id = movie.id,
        title = %movie.title,
        "Movie created",
    );

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies?title=&genre=
///
/// List all movies, or those whose title or genre contains the given text.
/// Falls back to the full list when a search matches nothing. A repeated
/// query key keeps its last value.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    params(MovieSearchParams),
    responses(
        (status = 200, description = "Matching movies, or every movie", body = [Movie]),
    )
)]
pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(pairs): AppQuery<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let params = MovieSearchParams::from_pairs(pairs);
    let movies = MovieRepo::list(&state.store, &params.to_filter()).await;

    Ok(Json(movies))
}

/// GET /movies/{id}
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id (>= 1)")),
    responses(
        (status = 200, description = "The movie", body = Movie),
        (status = 404, description = "Movie not found"),
        (status = 422, description = "Invalid movie id"),
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    MovieId(id): MovieId,
) -> AppResult<impl IntoResponse> {
    let movie = match id {
        Some(id) => MovieRepo::find_by_id(&state.store, id).await,
        None => None,
    };
    let movie = movie.ok_or_else(|| not_found(id))?;

    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Replace title, playtime, and genre of an existing movie. The id is kept.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id (>= 1)")),
    request_body = CreateMovie,
    responses(
        (status = 200, description = "Updated movie", body = Movie),
        (status = 404, description = "Movie not found"),
        (status = 422, description = "Invalid movie id or payload"),
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    MovieId(id): MovieId,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    let input = validate_create(input)?;
    let movie = match id {
        Some(id) => MovieRepo::update(&state.store, id, input).await,
        None => None,
    };
    let movie = movie.ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id (>= 1)")),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found"),
        (status = 422, description = "Invalid movie id"),
    )
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    MovieId(id): MovieId,
) -> AppResult<impl IntoResponse> {
    let deleted = match id {
        Some(id) => MovieRepo::delete(&state.store, id).await,
        None => false,
    };
    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(movie_id = ?id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
