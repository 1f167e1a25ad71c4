//! Field validation shared by the domain input types.

use std::fmt;

use smallvec::SmallVec;

pub(crate) const MUST_NOT_BE_NULL: &str = "must not be null";
pub(crate) const MUST_NOT_BE_BLANK: &str = "must not be blank";
pub(crate) const MUST_NOT_BE_NEGATIVE: &str = "must be greater than or equal to 0";

/// A single violated constraint on a named input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: &'static str,

    /// Human readable constraint message.
    pub message: String,
}

/// Every constraint violation found in one input, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: SmallVec<[FieldError; 4]>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// Return `value` when no violations were recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one violation was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for error in &self.errors {
            if !first {
                f.write_str(", ")?;
            }

            write!(f, "{}: {}", error.field, error.message)?;

            first = false;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub(crate) fn size_message(max: usize) -> String {
    format!("size must be between 0 and {max}")
}

/// Required text: present, not blank and at most `max` characters.
///
/// A missing value reports both the null and blank violations.
pub(crate) fn required_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    max: usize,
) {
    match value {
        None => {
            errors.push(field, MUST_NOT_BE_BLANK);
            errors.push(field, MUST_NOT_BE_NULL);
        }
        Some(text) => {
            if text.trim().is_empty() {
                errors.push(field, MUST_NOT_BE_BLANK);
            }

            max_length(errors, field, Some(text), max);
        }
    }
}

/// Optional text limited to `max` characters.
pub(crate) fn max_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    max: usize,
) {
    if value.is_some_and(|text| text.chars().count() > max) {
        errors.push(field, size_message(max));
    }
}

pub(crate) fn required<T>(errors: &mut ValidationErrors, field: &'static str, value: Option<&T>) {
    if value.is_none() {
        errors.push(field, MUST_NOT_BE_NULL);
    }
}

/// `Some` only when the text has visible content.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
