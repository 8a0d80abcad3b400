use std::fmt;

use serde::Serialize;

/// What kind of rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field was absent.
    Required,
    /// The field had the wrong JSON type.
    InvalidType,
    /// A whole number was expected, a fraction was given.
    NotInteger,
    /// Below the inclusive lower bound (or empty, for strings).
    TooSmall,
    /// Above the inclusive upper bound.
    TooBig,
    /// Not one of the allowed genre tags.
    InvalidEnumValue,
    /// Not a syntactically valid URL.
    InvalidUrl,
}

/// One step of a violation path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A single field-level violation.
///
/// Serializes as `{"code": "...", "path": ["genre", 1], "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub code: ViolationKind,
    pub path: Vec<PathSegment>,
    pub message: String,
}

impl Violation {
    pub fn new(code: ViolationKind, path: Vec<PathSegment>, message: impl Into<String>) -> Self {
        Violation {
            code,
            path,
            message: message.into(),
        }
    }

    /// A violation on a top-level field.
    pub fn field(code: ViolationKind, field: &str, message: impl Into<String>) -> Self {
        Self::new(code, vec![field.into()], message)
    }

    /// The top-level field this violation belongs to, if any.
    pub fn field_name(&self) -> Option<&str> {
        match self.path.first() {
            Some(PathSegment::Key(key)) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str(&self.message);
        }
        let path: Vec<String> = self.path.iter().map(ToString::to_string).collect();
        write!(f, "{}: {}", path.join("."), self.message)
    }
}

/// Every violation found in one validation pass, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        ValidationErrors(violations)
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any violation names the given top-level field.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field_name() == Some(field))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "invalid movie: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
