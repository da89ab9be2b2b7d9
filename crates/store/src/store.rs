use movies_core::movie::Movie;
use movies_core::types::DbId;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordered record sequence plus the next id to hand out.
#[derive(Debug)]
pub(crate) struct MovieTable {
    pub(crate) movies: Vec<Movie>,
    pub(crate) next_id: DbId,
}

impl MovieTable {
    /// Take the next id. Ids are never handed out twice, even after deletes.
    pub(crate) fn allocate_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn position(&self, id: DbId) -> Option<usize> {
        self.movies.iter().position(|m| m.id == id)
    }
}

/// Process-lifetime movie storage.
///
/// The sequence and counter share a single `RwLock`, so every repository
/// operation is one critical section. Designed to be wrapped in `Arc` and
/// held by the application state.
#[derive(Debug)]
pub struct MovieStore {
    table: RwLock<MovieTable>,
}

impl MovieStore {
    /// Create an empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MovieTable {
                movies: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.table.read().await.movies.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, MovieTable> {
        self.table.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, MovieTable> {
        self.table.write().await
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
