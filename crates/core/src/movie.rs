//! Movie record types and field validation.
//!
//! `CreateMovie` carries its constraints declaratively via `validator`
//! attributes; [`validate_create`] turns a failed check into a
//! [`CoreError::Validation`] so callers only ever deal with one error type.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in `NotFound` errors.
pub const ENTITY_MOVIE: &str = "Movie";

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored movie record. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    #[schema(example = 1)]
    pub id: DbId,
    #[schema(example = "Inception")]
    pub title: String,
    /// Running time in minutes.
    #[schema(example = 148)]
    pub playtime: i64,
    #[schema(example = "Sci-Fi")]
    pub genre: String,
}

impl Movie {
    /// Build a record from validated input and a store-assigned id.
    pub fn from_input(id: DbId, input: CreateMovie) -> Self {
        Self {
            id,
            title: input.title,
            playtime: input.playtime,
            genre: input.genre,
        }
    }

    /// Replace every mutable field with the values from `input`.
    pub fn apply(&mut self, input: CreateMovie) {
        self.title = input.title;
        self.playtime = input.playtime;
        self.genre = input.genre;
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Payload for creating a movie, also used for full replacement on update.
///
/// Any `id` key in the incoming JSON is ignored; ids are server-assigned.
/// `playtime` also accepts integral floats and numeric strings (`148.0`,
/// `"148"`), which are coerced to an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMovie {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    #[schema(min_length = 1, example = "Inception")]
    pub title: String,
    /// Running time in minutes.
    #[validate(range(min = 1, message = "Playtime must be greater than 0"))]
    #[serde(deserialize_with = "deserialize_lax_int")]
    #[schema(minimum = 1, example = 148)]
    pub playtime: i64,
    #[validate(length(min = 1, message = "Genre must not be empty"))]
    #[schema(min_length = 1, example = "Sci-Fi")]
    pub genre: String,
}

/// Integer-like JSON values accepted for numeric fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum LaxInt {
    Int(i64),
    Float(f64),
    Text(String),
}

fn deserialize_lax_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match LaxInt::deserialize(deserializer)? {
        LaxInt::Int(n) => Ok(n),
        LaxInt::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        LaxInt::Float(f) => Err(D::Error::custom(format!(
            "expected an integer, got fractional number {f}"
        ))),
        LaxInt::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected an integer, got string '{text}'"))),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check the field constraints on a create/replace payload.
///
/// Rules:
/// - `title` is non-empty
/// - `playtime` is strictly positive
/// - `genre` is non-empty
pub fn validate_create(input: CreateMovie) -> Result<CreateMovie, CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))?;
    Ok(input)
}

/// Reject ids that can never be assigned by the store.
pub fn validate_movie_id(id: DbId) -> Result<DbId, CoreError> {
    if id < 1 {
        return Err(CoreError::Validation(format!(
            "Movie id must be greater than or equal to 1, got {id}"
        )));
    }
    Ok(id)
}

/// Parse a raw `{id}` path segment.
///
/// Returns `Ok(None)` for an unsigned decimal too large for [`DbId`]: it is a
/// well-formed positive id that no record can carry. Non-numeric segments
/// and values below 1 are validation errors.
pub fn parse_movie_id(raw: &str) -> Result<Option<DbId>, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) => validate_movie_id(id).map(Some),
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => Ok(None),
        Err(_) => Err(CoreError::Validation(format!(
            "Movie id must be an integer, got '{raw}'"
        ))),
    }
}
