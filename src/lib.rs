//! A small JSON API over an in-memory movie collection.
//!
//! Schema checks live in [`validate_full`] and [`validate_partial`]. The
//! [`MovieStore`] owns the collection and is its only writer. The axum
//! transport in `http` sits behind the `http` feature (on by default).

pub mod config;
mod movie;
pub mod seed;
mod store;
mod validation;

#[cfg(feature = "http")]
pub mod http;

pub use config::{Config, ConfigError};
pub use movie::{
    Genre, Movie, MoviePatch, NewMovie, UnknownGenre, DEFAULT_RATE, MAX_RATE, MAX_YEAR, MIN_RATE,
    MIN_YEAR,
};
pub use seed::SeedError;
pub use store::{InMemoryMovieStore, MovieStore, StoreError};
pub use validation::{
    validate_full, validate_partial, PathSegment, ValidationErrors, Violation, ViolationKind,
};

#[cfg(feature = "http")]
pub use http::{ApiError, CorsPolicy};
