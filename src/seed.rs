//! Seed collections loaded at process start.
//!
//! A seed is a JSON array of movie objects, each carrying its own `id`. Every
//! record goes through [`validate_full`] so the store never holds anything the
//! API itself would have rejected.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::movie::Movie;
use crate::store::InMemoryMovieStore;
use crate::validation::{validate_full, ValidationErrors};

const EMBEDDED: &str = include_str!("../data/movies.json");

#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// The seed document is not a JSON array.
    NotAnArray,
    /// Record at `index` has no string `id`.
    MissingId { index: usize },
    /// Record at `index` fails full validation.
    Invalid {
        index: usize,
        errors: ValidationErrors,
    },
    DuplicateId(String),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Io(e) => write!(f, "failed to read seed: {}", e),
            SeedError::Json(e) => write!(f, "seed is not valid JSON: {}", e),
            SeedError::NotAnArray => write!(f, "seed must be a JSON array of movies"),
            SeedError::MissingId { index } => {
                write!(f, "seed movie #{} has no string id", index)
            }
            SeedError::Invalid { index, errors } => {
                write!(f, "seed movie #{} is invalid: {}", index, errors)
            }
            SeedError::DuplicateId(id) => write!(f, "seed movie id {} appears twice", id),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedError::Io(e) => Some(e),
            SeedError::Json(e) => Some(e),
            SeedError::Invalid { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        SeedError::Io(err)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        SeedError::Json(err)
    }
}

/// Parse and validate a seed document.
pub fn parse(json: &str) -> Result<Vec<Movie>, SeedError> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Array(records) = document else {
        return Err(SeedError::NotAnArray);
    };

    let mut seen = HashSet::with_capacity(records.len());
    let mut movies = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or(SeedError::MissingId { index })?;
        let data = validate_full(record).map_err(|errors| SeedError::Invalid { index, errors })?;
        if !seen.insert(id.to_string()) {
            return Err(SeedError::DuplicateId(id.to_string()));
        }
        movies.push(Movie::new(id, data));
    }
    Ok(movies)
}

/// The collection bundled with the crate.
pub fn embedded() -> Result<Vec<Movie>, SeedError> {
    parse(EMBEDDED)
}

/// Read and validate a seed file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Movie>, SeedError> {
    let json = std::fs::read_to_string(path)?;
    parse(&json)
}

/// Build a store holding a validated seed document.
pub fn store_from_json(json: &str) -> Result<InMemoryMovieStore, SeedError> {
    Ok(InMemoryMovieStore::with_movies(parse(json)?))
}

/// Build a store from an optional seed file, falling back to the embedded
/// collection.
pub fn load_store(path: Option<&Path>) -> Result<InMemoryMovieStore, SeedError> {
    let movies = match path {
        Some(path) => load_file(path)?,
        None => embedded()?,
    };
    tracing::info!(count = movies.len(), "seeded movie collection");
    Ok(InMemoryMovieStore::with_movies(movies))
}
