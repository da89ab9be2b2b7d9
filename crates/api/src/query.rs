//! Query parameter types for API handlers.

use movies_core::search::SearchFilter;
use utoipa::IntoParams;

/// Search parameters for the movie list endpoint (`?title=&genre=`).
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieSearchParams {
    /// Case-insensitive substring of the title.
    #[param(example = "Inception")]
    pub title: Option<String>,
    /// Case-insensitive substring of the genre.
    #[param(example = "Sci-Fi")]
    pub genre: Option<String>,
}

impl MovieSearchParams {
    /// Collect search parameters from raw query pairs.
    ///
    /// A repeated key keeps its last value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut params, (key, value)| {
                match key.as_str() {
                    "title" => params.title = Some(value),
                    "genre" => params.genre = Some(value),
                    _ => {}
                }
                params
            })
    }

    pub fn to_filter(&self) -> SearchFilter {
        SearchFilter::new(self.title.as_deref(), self.genre.as_deref())
    }
}
