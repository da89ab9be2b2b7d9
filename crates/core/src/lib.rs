//! Domain layer for the movie service.
//!
//! Holds the record types, field validation, search-filter matching, and the
//! error taxonomy shared by the store and the HTTP layer.

pub mod error;
pub mod movie;
pub mod search;
pub mod types;
