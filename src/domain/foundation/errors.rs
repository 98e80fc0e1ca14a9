//! Error types for the domain layer.
//!
//! `Violation` describes a single field-level failure. `ValidationErrors`
//! accumulates every violation of a candidate record keyed by field path
//! (`name`, `triggers.3`, ...) so one validation pass reports every problem.
//! `DomainError` is the uniform, code-tagged error surfaced to outer layers.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// A single constraint failure on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Value is absent, null, or empty after trimming.
    #[error("is required")]
    MissingField,

    /// Numeric value outside its inclusive bounds. A `None` bound is open.
    #[error("{}", describe_range(*min, *max, *actual))]
    OutOfRange {
        min: Option<i64>,
        max: Option<i64>,
        actual: i64,
    },

    /// Value is not a member of a closed set of labels.
    #[error("'{value}' is not one of [{}]", allowed.join(", "))]
    InvalidEnum {
        value: String,
        allowed: Vec<&'static str>,
    },

    /// Array holds more entries than allowed.
    #[error("must contain at most {max} entries, got {actual}")]
    TooMany { max: usize, actual: usize },

    /// String is longer than allowed (measured in characters, after trimming).
    #[error("must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    /// Label is not a category of the named ordinal scale.
    #[error("'{label}' is not a {scale} category")]
    UnknownCategory { scale: &'static str, label: String },

    /// Value is not a well-formed record identifier.
    #[error("'{value}' is not a valid identifier")]
    InvalidReference { value: String },

    /// Value is well-typed but inconsistent with another field.
    #[error("{reason}")]
    InvalidFormat { reason: String },
}

fn describe_range(min: Option<i64>, max: Option<i64>, actual: i64) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("must be between {} and {}, got {}", min, max, actual),
        (Some(min), None) => format!("must be at least {}, got {}", min, actual),
        (None, Some(max)) => format!("must be at most {}, got {}", max, actual),
        (None, None) => format!("is out of range, got {}", actual),
    }
}

impl Violation {
    /// Returns the error code for this violation.
    pub fn code(&self) -> ErrorCode {
        match self {
            Violation::MissingField => ErrorCode::MissingField,
            Violation::OutOfRange { .. } => ErrorCode::OutOfRange,
            Violation::InvalidEnum { .. } => ErrorCode::InvalidEnum,
            Violation::TooMany { .. } => ErrorCode::TooMany,
            Violation::TooLong { .. } => ErrorCode::TooLong,
            Violation::UnknownCategory { .. } => ErrorCode::UnknownCategory,
            Violation::InvalidReference { .. } => ErrorCode::InvalidReference,
            Violation::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Builds the path of one element of an array field, e.g. `triggers.0`.
pub fn element_path(field: &str, index: usize) -> String {
    format!("{}.{}", field, index)
}

/// Accumulator of every violation found on a candidate record.
///
/// An empty accumulator means the candidate is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<Violation>>,
}

impl ValidationErrors {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator holding a single violation.
    pub fn single(path: impl Into<String>, violation: Violation) -> Self {
        let mut errors = Self::new();
        errors.add(path, violation);
        errors
    }

    /// Records a violation at the given field path.
    pub fn add(&mut self, path: impl Into<String>, violation: Violation) {
        self.fields.entry(path.into()).or_default().push(violation);
    }

    /// Records the failure of `result`, if any, and passes the value through.
    pub fn check<T>(&mut self, path: &str, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.add(path, violation);
                None
            }
        }
    }

    /// Moves every violation of `other` into this accumulator.
    pub fn merge(&mut self, other: ValidationErrors) {
        for (path, violations) in other.fields {
            self.fields.entry(path).or_default().extend(violations);
        }
    }

    /// Returns true if no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the total number of violations across all fields.
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Returns the violations recorded for one field path.
    pub fn get(&self, path: &str) -> &[Violation] {
        self.fields.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if the path has a violation with the given code.
    pub fn has(&self, path: &str, code: ErrorCode) -> bool {
        self.get(path).iter().any(|v| v.code() == code)
    }

    /// Returns the offending field paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over `(path, violation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Violation)> {
        self.fields
            .iter()
            .flat_map(|(path, vs)| vs.iter().map(move |v| (path.as_str(), v)))
    }

    /// Converts to `Ok(())` when empty, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, violation) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", path, violation)?;
            first = false;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    // Field validation
    ValidationFailed,
    MissingField,
    OutOfRange,
    InvalidEnum,
    TooMany,
    TooLong,
    UnknownCategory,
    InvalidReference,
    InvalidFormat,

    // Relationship and lifecycle
    SelfReference,
    IllegalTransition,

    // Storage
    DuplicateKey,
    NotFound,
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidEnum => "INVALID_ENUM",
            ErrorCode::TooMany => "TOO_MANY",
            ErrorCode::TooLong => "TOO_LONG",
            ErrorCode::UnknownCategory => "UNKNOWN_CATEGORY",
            ErrorCode::InvalidReference => "INVALID_REFERENCE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::SelfReference => "SELF_REFERENCE",
            ErrorCode::IllegalTransition => "ILLEGAL_TRANSITION",
            ErrorCode::DuplicateKey => "DUPLICATE_KEY",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut err = DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Validation failed on {} field(s)", errors.paths().count()),
        );
        for path in errors.paths() {
            let messages: Vec<String> = errors.get(path).iter().map(|v| v.to_string()).collect();
            err = err.with_detail(path, messages.join("; "));
        }
        err
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
