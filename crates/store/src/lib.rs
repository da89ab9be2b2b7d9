//! In-memory storage for movie records.
//!
//! [`MovieStore`] owns the record sequence and id counter for the lifetime
//! of the process; [`repositories::MovieRepo`] is the only code that reads
//! or mutates it.

pub mod repositories;
mod store;

pub use store::MovieStore;
