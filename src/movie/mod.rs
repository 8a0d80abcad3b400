//! Movie records and the validated payloads that create or change them.
//!
//! A [`Movie`] only ever comes into existence through [`Movie::new`] with a
//! [`NewMovie`] produced by [`crate::validate_full`], and only changes through
//! [`MoviePatch::apply_to`] with a patch produced by
//! [`crate::validate_partial`]. The `id` is never part of either payload.

mod genre;

use serde::Serialize;

pub use genre::{Genre, UnknownGenre};

/// Rate assigned on creation when the payload omits one.
pub const DEFAULT_RATE: f64 = 5.0;

/// Smallest accepted release year.
pub const MIN_YEAR: u16 = 1900;
/// Largest accepted release year.
pub const MAX_YEAR: u16 = 2024;

/// Lowest accepted rate.
pub const MIN_RATE: f64 = 0.0;
/// Highest accepted rate.
pub const MAX_RATE: f64 = 10.0;

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: u16,
    pub director: String,
    pub duration: u64,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

impl Movie {
    /// Attach an id to validated creation data.
    pub fn new(id: impl Into<String>, data: NewMovie) -> Self {
        Movie {
            id: id.into(),
            title: data.title,
            year: data.year,
            director: data.director,
            duration: data.duration,
            poster: data.poster,
            genre: data.genre,
            rate: data.rate,
        }
    }

    /// Whether any of this movie's genres equals `tag` after case-folding.
    pub fn has_genre(&self, tag: &str) -> bool {
        self.genre.iter().any(|genre| genre.matches_tag(tag))
    }
}

/// Fully validated creation data: every field of a movie except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: u16,
    pub director: String,
    pub duration: u64,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// Validated partial data. Only the fields that were present in the payload
/// are `Some`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<u16>,
    pub director: Option<String>,
    pub duration: Option<u64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// True when no field was present.
    pub fn is_empty(&self) -> bool {
        self == &MoviePatch::default()
    }

    /// Overwrite the fields present in the patch, keep the rest. The id is
    /// untouched.
    pub fn apply_to(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = self.director {
            movie.director = director;
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(poster) = self.poster {
            movie.poster = poster;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
        if let Some(rate) = self.rate {
            movie.rate = rate;
        }
    }
}
