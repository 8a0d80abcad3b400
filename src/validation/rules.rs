//! Per-field rules. Each rule sees a value that is present in the payload and
//! either converts it or reports why it can't.

use serde_json::Value;
use url::Url;

use super::violation::{Violation, ViolationKind};
use crate::movie::{Genre, MAX_RATE, MAX_YEAR, MIN_RATE, MIN_YEAR};

pub(super) type RuleResult<T> = Result<T, Vec<Violation>>;

fn reject<T>(code: ViolationKind, field: &str, message: impl Into<String>) -> RuleResult<T> {
    Err(vec![Violation::field(code, field, message)])
}

fn string(value: &Value, field: &str) -> RuleResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => reject(
            ViolationKind::InvalidType,
            field,
            format!("Movie {} must be a string", field),
        ),
    }
}

fn number(value: &Value, field: &str) -> RuleResult<f64> {
    match value {
        Value::Number(n) => Ok(n.as_f64().unwrap_or(f64::NAN)),
        _ => reject(
            ViolationKind::InvalidType,
            field,
            format!("Movie {} must be a number", field),
        ),
    }
}

/// Whole numbers, including floats with no fractional part (`2000.0`).
fn integer(value: &Value, field: &str) -> RuleResult<i128> {
    let Value::Number(n) = value else {
        return reject(
            ViolationKind::InvalidType,
            field,
            format!("Movie {} must be a number", field),
        );
    };
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 => Ok(f as i128),
        _ => reject(
            ViolationKind::NotInteger,
            field,
            format!("Movie {} must be an integer", field),
        ),
    }
}

pub(super) fn title(value: &Value) -> RuleResult<String> {
    let title = string(value, "title")?;
    if title.is_empty() {
        return reject(ViolationKind::TooSmall, "title", "Movie title must not be empty");
    }
    Ok(title)
}

pub(super) fn year(value: &Value) -> RuleResult<u16> {
    let year = integer(value, "year")?;
    if year < i128::from(MIN_YEAR) {
        return reject(
            ViolationKind::TooSmall,
            "year",
            format!("Movie year must be greater than or equal to {}", MIN_YEAR),
        );
    }
    if year > i128::from(MAX_YEAR) {
        return reject(
            ViolationKind::TooBig,
            "year",
            format!("Movie year must be less than or equal to {}", MAX_YEAR),
        );
    }
    // bounds checked above
    Ok(year as u16)
}

pub(super) fn director(value: &Value) -> RuleResult<String> {
    string(value, "director")
}

pub(super) fn duration(value: &Value) -> RuleResult<u64> {
    let duration = integer(value, "duration")?;
    if duration <= 0 {
        return reject(
            ViolationKind::TooSmall,
            "duration",
            "Movie duration must be positive",
        );
    }
    u64::try_from(duration)
        .or_else(|_| reject(ViolationKind::TooBig, "duration", "Movie duration is too large"))
}

pub(super) fn poster(value: &Value) -> RuleResult<String> {
    let poster = string(value, "poster")?;
    if Url::parse(&poster).is_err() {
        return reject(
            ViolationKind::InvalidUrl,
            "poster",
            "Movie poster must be a valid URL",
        );
    }
    Ok(poster)
}

/// Reports one violation per element that is not an allowed tag.
pub(super) fn genre(value: &Value) -> RuleResult<Vec<Genre>> {
    let Value::Array(items) = value else {
        return reject(
            ViolationKind::InvalidType,
            "genre",
            "Movie genre must be an array of enum Genre",
        );
    };

    let mut genres = Vec::with_capacity(items.len());
    let mut violations = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Some(tag) = item.as_str() else {
            violations.push(Violation::new(
                ViolationKind::InvalidType,
                vec!["genre".into(), index.into()],
                "Movie genre must be an array of enum Genre",
            ));
            continue;
        };
        match tag.parse::<Genre>() {
            Ok(genre) => genres.push(genre),
            Err(_) => violations.push(Violation::new(
                ViolationKind::InvalidEnumValue,
                vec!["genre".into(), index.into()],
                "Movie genre must be one of the allowed ones",
            )),
        }
    }

    if violations.is_empty() {
        Ok(genres)
    } else {
        Err(violations)
    }
}

pub(super) fn rate(value: &Value) -> RuleResult<f64> {
    let rate = number(value, "rate")?;
    if rate < MIN_RATE {
        return reject(
            ViolationKind::TooSmall,
            "rate",
            format!("Movie rate must be greater than or equal to {}", MIN_RATE),
        );
    }
    if rate > MAX_RATE {
        return reject(
            ViolationKind::TooBig,
            "rate",
            format!("Movie rate must be less than or equal to {}", MAX_RATE),
        );
    }
    Ok(rate)
}
