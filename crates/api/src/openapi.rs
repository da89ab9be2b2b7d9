//! OpenAPI document for the HTTP surface, served at `/openapi.json`.

use movies_core::movie::{CreateMovie, Movie};
use utoipa::OpenApi;

use crate::handlers::movies;

#[derive(OpenApi)]
#[openapi(
    info(title = "Movie API", description = "Movie management API"),
    paths(
        movies::create_movie,
        movies::list_movies,
        movies::get_movie,
        movies::update_movie,
        movies::delete_movie,
    ),
    components(schemas(Movie, CreateMovie)),
    tags((name = "movies", description = "Register, search, edit, and remove movies"))
)]
pub struct ApiDoc;
