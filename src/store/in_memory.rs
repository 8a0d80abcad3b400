//! InMemoryMovieStore - Vec-backed movie store.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use super::{MovieStore, StoreError};
use crate::movie::{Movie, MoviePatch, NewMovie};

/// In-memory movie store backed by a `Vec` behind a `RwLock`.
///
/// Clone-friendly via Arc: clones share the same collection.
#[derive(Clone)]
pub struct InMemoryMovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_movies(Vec::new())
    }

    /// Callers must hand over records that already passed full validation.
    pub(crate) fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Movie>>, StoreError> {
        self.movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Movie>>, StoreError> {
        self.movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))
    }
}

fn fresh_id(movies: &[Movie]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !movies.iter().any(|m| m.id == id) {
            return id;
        }
    }
}

impl MovieStore for InMemoryMovieStore {
    fn list_all(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn list_by_genre(&self, tag: &str) -> Result<Vec<Movie>, StoreError> {
        let movies = self.read()?;
        let matched: Vec<Movie> = movies
            .iter()
            .filter(|movie| movie.has_genre(tag))
            .cloned()
            .collect();
        tracing::debug!(genre = tag, matched = matched.len(), "filtered movies by genre");
        Ok(matched)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        let movies = self.read()?;
        Ok(movies.iter().find(|movie| movie.id == id).cloned())
    }

    fn insert(&self, data: NewMovie) -> Result<Movie, StoreError> {
        let mut movies = self.write()?;
        let movie = Movie::new(fresh_id(&movies), data);
        movies.push(movie.clone());
        tracing::info!(id = %movie.id, title = %movie.title, "movie created");
        Ok(movie)
    }

    fn update(&self, id: &str, patch: MoviePatch) -> Result<Option<Movie>, StoreError> {
        let mut movies = self.write()?;
        let Some(movie) = movies.iter_mut().find(|movie| movie.id == id) else {
            return Ok(None);
        };
        patch.apply_to(movie);
        tracing::info!(id = %movie.id, "movie updated");
        Ok(Some(movie.clone()))
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut movies = self.write()?;
        match movies.iter().position(|movie| movie.id == id) {
            Some(index) => {
                movies.remove(index);
                tracing::info!(id, "movie deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }
}
