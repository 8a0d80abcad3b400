//! Validation - checks a candidate JSON payload against the movie schema.
//!
//! Two modes share the same per-field rules:
//!
//! - [`validate_full`]: every field is required except `rate`, which defaults
//!   to [`DEFAULT_RATE`](crate::DEFAULT_RATE).
//! - [`validate_partial`]: every field is optional, but a present field must
//!   pass the same rule. No defaults.
//!
//! Each field stops at its first violation; all fields are checked, so one call
//! reports everything wrong with the payload. Unknown keys are ignored.
//!
//! ## Example
//!
//! ```
//! use movies_api::validate_full;
//! use serde_json::json;
//!
//! let movie = validate_full(&json!({
//!     "title": "Heat",
//!     "year": 1995,
//!     "director": "Michael Mann",
//!     "duration": 170,
//!     "poster": "https://example.com/heat.jpg",
//!     "genre": ["Crime", "Thriller"]
//! }))
//! .unwrap();
//! assert_eq!(movie.rate, 5.0);
//! ```

mod rules;
mod violation;

use serde_json::{Map, Value};

use crate::movie::{MoviePatch, NewMovie, DEFAULT_RATE};
use rules::RuleResult;

pub use violation::{PathSegment, ValidationErrors, Violation, ViolationKind};

/// Validate a complete movie payload.
pub fn validate_full(candidate: &Value) -> Result<NewMovie, ValidationErrors> {
    let mut fields = Fields::of(candidate)?;

    let title = fields.required("title", rules::title);
    let year = fields.required("year", rules::year);
    let director = fields.required("director", rules::director);
    let duration = fields.required("duration", rules::duration);
    let poster = fields.required("poster", rules::poster);
    let genre = fields.required("genre", rules::genre);
    let rate = fields.optional("rate", rules::rate);

    match (title, year, director, duration, poster, genre) {
        (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre))
            if fields.is_clean() =>
        {
            Ok(NewMovie {
                title,
                year,
                director,
                duration,
                poster,
                genre,
                rate: rate.unwrap_or(DEFAULT_RATE),
            })
        }
        _ => Err(fields.into_errors()),
    }
}

/// Validate a partial movie payload. `{}` is valid and yields an empty patch.
pub fn validate_partial(candidate: &Value) -> Result<MoviePatch, ValidationErrors> {
    let mut fields = Fields::of(candidate)?;

    let patch = MoviePatch {
        title: fields.optional("title", rules::title),
        year: fields.optional("year", rules::year),
        director: fields.optional("director", rules::director),
        duration: fields.optional("duration", rules::duration),
        poster: fields.optional("poster", rules::poster),
        genre: fields.optional("genre", rules::genre),
        rate: fields.optional("rate", rules::rate),
    };

    if fields.is_clean() {
        Ok(patch)
    } else {
        Err(fields.into_errors())
    }
}

/// Walks the fields of one payload and accumulates violations across them.
struct Fields<'a> {
    object: &'a Map<String, Value>,
    violations: Vec<Violation>,
}

impl<'a> Fields<'a> {
    fn of(candidate: &'a Value) -> Result<Self, ValidationErrors> {
        match candidate {
            Value::Object(object) => Ok(Fields {
                object,
                violations: Vec::new(),
            }),
            _ => Err(ValidationErrors::new(vec![Violation::new(
                ViolationKind::InvalidType,
                Vec::new(),
                "Movie must be a JSON object",
            )])),
        }
    }

    fn required<T>(&mut self, name: &str, rule: fn(&Value) -> RuleResult<T>) -> Option<T> {
        if !self.object.contains_key(name) {
            self.violations.push(Violation::field(
                ViolationKind::Required,
                name,
                format!("Movie {} is required", name),
            ));
            return None;
        }
        self.optional(name, rule)
    }

    fn optional<T>(&mut self, name: &str, rule: fn(&Value) -> RuleResult<T>) -> Option<T> {
        let value = self.object.get(name)?;
        match rule(value) {
            Ok(parsed) => Some(parsed),
            Err(mut violations) => {
                self.violations.append(&mut violations);
                None
            }
        }
    }

    fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    fn into_errors(self) -> ValidationErrors {
        ValidationErrors::new(self.violations)
    }
}
