//! Reusable field validators.
//!
//! Each validator is a pure function returning `Result<T, Violation>`, so
//! entity schemas compose them with [`ValidationErrors::check`] and collect
//! every failure instead of stopping at the first one.
//!
//! Strings are always trimmed before emptiness or length checks, so a value
//! made only of whitespace counts as empty.

use std::str::FromStr;

use super::{element_path, ValidationErrors, Violation};

/// A closed set of labelled values (status enums, message types, ...).
pub trait ClosedSet: Sized + Copy + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The canonical label of this member.
    fn label(&self) -> &'static str;

    /// Looks up a member by its exact label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.label() == label)
    }

    /// All labels in declaration order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.label()).collect()
    }
}

/// Strips leading and trailing whitespace.
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Fails with `MissingField` when the value is absent.
pub fn required<T>(value: Option<T>) -> Result<T, Violation> {
    value.ok_or(Violation::MissingField)
}

/// Trims the value and fails with `MissingField` when nothing remains.
pub fn required_text(value: Option<&str>) -> Result<String, Violation> {
    let trimmed = trim(required(value)?);
    if trimmed.is_empty() {
        return Err(Violation::MissingField);
    }
    Ok(trimmed)
}

/// Fails with `OutOfRange` unless `min <= value <= max`.
pub fn range(value: i64, min: i64, max: i64) -> Result<i64, Violation> {
    if value < min || value > max {
        return Err(Violation::OutOfRange {
            min: Some(min),
            max: Some(max),
            actual: value,
        });
    }
    Ok(value)
}

/// Validates a count field: at least `min`, and representable as `u32`.
pub fn count(value: i64, min: i64) -> Result<u32, Violation> {
    if value < min {
        return Err(Violation::OutOfRange {
            min: Some(min),
            max: None,
            actual: value,
        });
    }
    u32::try_from(value).map_err(|_| Violation::OutOfRange {
        min: Some(min),
        max: Some(i64::from(u32::MAX)),
        actual: value,
    })
}

/// Fails with `InvalidEnum` unless the label names a member of `E`.
pub fn enum_member<E: ClosedSet>(value: &str) -> Result<E, Violation> {
    E::from_label(value).ok_or_else(|| Violation::InvalidEnum {
        value: value.to_string(),
        allowed: E::labels(),
    })
}

/// Fails with `TooMany` when the array holds more than `max` entries.
pub fn array_size<T>(items: &[T], max: usize) -> Result<(), Violation> {
    if items.len() > max {
        return Err(Violation::TooMany {
            max,
            actual: items.len(),
        });
    }
    Ok(())
}

/// Fails with `TooLong` when the string has more than `max` characters.
pub fn element_length(value: &str, max: usize) -> Result<(), Violation> {
    let actual = value.chars().count();
    if actual > max {
        return Err(Violation::TooLong { max, actual });
    }
    Ok(())
}

/// Parses a record identifier, failing with `InvalidReference` when malformed.
pub fn reference<I: FromStr>(value: &str) -> Result<I, Violation> {
    value
        .trim()
        .parse()
        .map_err(|_| Violation::InvalidReference {
            value: value.to_string(),
        })
}

/// Validates a required identifier field.
pub fn required_reference<I: FromStr>(value: Option<&str>) -> Result<I, Violation> {
    let raw = required_text(value)?;
    reference(&raw)
}

/// Validates an optional free-text field: trimmed, bounded, empty becomes `None`.
pub fn optional_text(value: Option<&str>, max: usize) -> Result<Option<String>, Violation> {
    match value.map(trim) {
        Some(text) if text.is_empty() => Ok(None),
        Some(text) => {
            element_length(&text, max)?;
            Ok(Some(text))
        }
        None => Ok(None),
    }
}

/// Validates an array of strings: every element trimmed, the array capped at
/// `max_items`, each element capped at `max_len` characters.
///
/// The size check and every per-element check are all evaluated; element
/// failures are recorded at `field.<index>`.
pub fn trimmed_list(
    errors: &mut ValidationErrors,
    field: &str,
    items: &[String],
    max_items: usize,
    max_len: usize,
) -> Vec<String> {
    errors.check(field, array_size(items, max_items));

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let trimmed = trim(item);
            errors.check(&element_path(field, index), element_length(&trimmed, max_len));
            trimmed
        })
        .collect()
}
