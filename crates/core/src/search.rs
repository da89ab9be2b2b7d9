//! Title/genre search filter for the movie list endpoint.
//!
//! The two criteria are OR-ed: a movie is included when either active
//! criterion is a case-insensitive substring of the corresponding field.
//! An absent or empty criterion is inactive.

use crate::movie::Movie;

/// Lowercased search criteria; `None` means the criterion is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    title: Option<String>,
    genre: Option<String>,
}

impl SearchFilter {
    pub fn new(title: Option<&str>, genre: Option<&str>) -> Self {
        Self {
            title: normalize(title),
            genre: normalize(genre),
        }
    }

    /// True when at least one criterion should be applied.
    pub fn is_active(&self) -> bool {
        self.title.is_some() || self.genre.is_some()
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        let title_hit = self
            .title
            .as_deref()
            .is_some_and(|needle| movie.title.to_lowercase().contains(needle));
        let genre_hit = self
            .genre
            .as_deref()
            .is_some_and(|needle| movie.genre.to_lowercase().contains(needle));
        title_hit || genre_hit
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_lowercase)
}
