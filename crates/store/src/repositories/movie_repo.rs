//! Repository for movie records held in [`MovieStore`].
//!
//! Lookups are linear scans over the insertion-ordered sequence. Inputs are
//! expected to have passed `movies_core::movie::validate_create` already.

use movies_core::movie::{CreateMovie, Movie};
use movies_core::search::SearchFilter;
use movies_core::types::DbId;

use crate::MovieStore;

/// Provides data access for movie records.
pub struct MovieRepo;

impl MovieRepo {
    /// Append a new movie, assigning it the next id.
    pub async fn create(store: &MovieStore, input: CreateMovie) -> Movie {
        let mut table = store.write().await;
        let id = table.allocate_id();
        let movie = Movie::from_input(id, input);
        table.movies.push(movie.clone());
        tracing::debug!(movie_id = id, total = table.movies.len(), "Movie appended");
        movie
    }

    /// List movies in insertion order, optionally narrowed by `filter`.
    ///
    /// When the filter is active but nothing matches, the full list is
    /// returned instead of an empty one.
    pub async fn list(store: &MovieStore, filter: &SearchFilter) -> Vec<Movie> {
        let table = store.read().await;
        if !filter.is_active() {
            return table.movies.clone();
        }

        let matched: Vec<Movie> = table
            .movies
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();

        if matched.is_empty() {
            tracing::debug!(?filter, "No movies matched search, returning full list");
            return table.movies.clone();
        }
        matched
    }

    /// Find a movie by id. Returns `None` if no record has that id.
    pub async fn find_by_id(store: &MovieStore, id: DbId) -> Option<Movie> {
        let table = store.read().await;
        table.movies.iter().find(|m| m.id == id).cloned()
    }

    /// Replace title, playtime, and genre of the movie with `id` in place.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    pub async fn update(store: &MovieStore, id: DbId, input: CreateMovie) -> Option<Movie> {
        let mut table = store.write().await;
        let movie = table.movies.iter_mut().find(|m| m.id == id)?;
        movie.apply(input);
        Some(movie.clone())
    }

    /// Remove the movie with `id`. Returns `true` if a record was removed.
    pub async fn delete(store: &MovieStore, id: DbId) -> bool {
        let mut table = store.write().await;
        if table.position(id).is_none() {
            return false;
        }
        table.movies.retain(|m| m.id != id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, playtime: i64, genre: &str) -> CreateMovie {
        CreateMovie {
            title: title.to_string(),
            playtime,
            genre: genre.to_string(),
        }
    }

    async fn seeded() -> MovieStore {
        let store = MovieStore::new();
        MovieRepo::create(&store, input("Inception", 148, "Sci-Fi")).await;
        MovieRepo::create(&store, input("Up", 96, "Comedy")).await;
        store
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    // -- create ---------------------------------------------------------------

    #[tokio::test]
    async fn create_assigns_sequential_ids_from_one() {
        let store = MovieStore::new();
        for expected in 1..=5 {
            let movie = MovieRepo::create(&store, input("M", 90, "Drama")).await;
            assert_eq!(movie.id, expected);
        }
        assert_eq!(store.len().await, 5);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = seeded().await;
        assert!(MovieRepo::delete(&store, 2).await);

        let movie = MovieRepo::create(&store, input("Heat", 170, "Crime")).await;
        assert_eq!(movie.id, 3);

        assert!(MovieRepo::delete(&store, 1).await);
        assert!(MovieRepo::delete(&store, 3).await);
        assert!(store.is_empty().await);

        let movie = MovieRepo::create(&store, input("Alien", 117, "Horror")).await;
        assert_eq!(movie.id, 4);
    }

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let store = MovieStore::new();
        let created = MovieRepo::create(&store, input("Inception", 148, "Sci-Fi")).await;

        let found = MovieRepo::find_by_id(&store, created.id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(found.title, "Inception");
        assert_eq!(found.playtime, 148);
        assert_eq!(found.genre, "Sci-Fi");

        // Repeated reads see the same record.
        assert_eq!(MovieRepo::find_by_id(&store, created.id).await.unwrap(), found);
    }

    // -- list -----------------------------------------------------------------

    #[tokio::test]
    async fn list_without_filter_keeps_insertion_order() {
        let store = seeded().await;
        let movies = MovieRepo::list(&store, &SearchFilter::default()).await;
        assert_eq!(titles(&movies), ["Inception", "Up"]);
    }

    #[tokio::test]
    async fn list_by_title_returns_only_matches() {
        let store = seeded().await;
        let filter = SearchFilter::new(Some("Inception"), None);
        let movies = MovieRepo::list(&store, &filter).await;
        assert_eq!(titles(&movies), ["Inception"]);
    }

    #[tokio::test]
    async fn list_with_title_and_genre_is_or() {
        let store = seeded().await;
        MovieRepo::create(&store, input("Heat", 170, "Crime")).await;

        let filter = SearchFilter::new(Some("incep"), Some("comedy"));
        let movies = MovieRepo::list(&store, &filter).await;
        assert_eq!(titles(&movies), ["Inception", "Up"]);
    }

    #[tokio::test]
    async fn list_with_no_match_falls_back_to_everything() {
        let store = seeded().await;
        let filter = SearchFilter::new(Some("zzz"), None);
        let movies = MovieRepo::list(&store, &filter).await;
        assert_eq!(titles(&movies), ["Inception", "Up"]);
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let store = MovieStore::new();
        let filter = SearchFilter::new(Some("anything"), None);
        assert!(MovieRepo::list(&store, &filter).await.is_empty());
    }

    // -- update ---------------------------------------------------------------

    #[tokio::test]
    async fn update_replaces_fields_and_preserves_id() {
        let store = seeded().await;
        let updated = MovieRepo::update(&store, 2, input("Up", 101, "Animation"))
            .await
            .unwrap();

        assert_eq!(updated.id, 2);
        assert_eq!(updated.playtime, 101);
        assert_eq!(updated.genre, "Animation");
        assert_eq!(MovieRepo::find_by_id(&store, 2).await.unwrap(), updated);

        // Position in the sequence is unchanged.
        let movies = MovieRepo::list(&store, &SearchFilter::default()).await;
        assert_eq!(titles(&movies), ["Inception", "Up"]);
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let store = seeded().await;
        assert!(MovieRepo::update(&store, 99, input("X", 1, "Y")).await.is_none());
        assert_eq!(store.len().await, 2);
    }

    // -- delete ---------------------------------------------------------------

    #[tokio::test]
    async fn delete_then_find_returns_none() {
        let store = seeded().await;
        assert!(MovieRepo::delete(&store, 1).await);
        assert!(MovieRepo::find_by_id(&store, 1).await.is_none());

        let movies = MovieRepo::list(&store, &SearchFilter::default()).await;
        assert_eq!(titles(&movies), ["Up"]);
    }

    #[tokio::test]
    async fn delete_missing_id_returns_false() {
        let store = seeded().await;
        assert!(!MovieRepo::delete(&store, 42).await);
        assert_eq!(store.len().await, 2);
    }

    // -- concurrency ----------------------------------------------------------

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(MovieStore::new());
        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = std::sync::Arc::clone(&store);
                tokio::spawn(async move {
                    MovieRepo::create(&store, input(&format!("M{i}"), 90, "Drama"))
                        .await
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<DbId>>());
    }
}
