//! Store - the owned, in-memory movie collection.
//!
//! The store never validates: it takes payloads that already went through
//! [`crate::validate_full`] / [`crate::validate_partial`] and is the only place
//! that writes the collection or produces ids.
//!
//! ## Example
//!
//! ```
//! use movies_api::{validate_full, InMemoryMovieStore, MovieStore};
//! use serde_json::json;
//!
//! let store = InMemoryMovieStore::new();
//! let data = validate_full(&json!({
//!     "title": "Alien",
//!     "year": 1979,
//!     "director": "Ridley Scott",
//!     "duration": 117,
//!     "poster": "https://example.com/alien.jpg",
//!     "genre": ["Horror", "Sci-Fi"]
//! }))
//! .unwrap();
//!
//! let created = store.insert(data).unwrap();
//! assert_eq!(store.get_by_id(&created.id).unwrap(), Some(created));
//! assert_eq!(store.list_by_genre("sci-fi").unwrap().len(), 1);
//! ```

mod in_memory;

use std::fmt;

use crate::movie::{Movie, MoviePatch, NewMovie};

pub use in_memory::InMemoryMovieStore;

/// Error type for store operations. A missing id is not an error: lookups
/// return `None` / `false` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "movie store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// CRUD over the movie collection.
///
/// Mutations are serialized; reads may run concurrently but never observe a
/// half-applied mutation.
pub trait MovieStore: Send + Sync {
    /// Every movie, in storage order.
    fn list_all(&self) -> Result<Vec<Movie>, StoreError>;

    /// Movies with a genre equal to `tag` after case-folding. Unknown tags
    /// match nothing.
    fn list_by_genre(&self, tag: &str) -> Result<Vec<Movie>, StoreError>;

    /// The movie with exactly this id.
    fn get_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError>;

    /// Assign a fresh id, append, and return the created movie.
    fn insert(&self, data: NewMovie) -> Result<Movie, StoreError>;

    /// Merge the patch onto the movie in place. `None` if the id is unknown.
    fn update(&self, id: &str, patch: MoviePatch) -> Result<Option<Movie>, StoreError>;

    /// Remove the movie, keeping the order of the rest. `false` if the id is
    /// unknown.
    fn remove(&self, id: &str) -> Result<bool, StoreError>;

    /// Number of stored movies.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
