use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use crate::validation_error::ValidationError;

/// A mapping of field names to the first validation error recorded for them
pub type FieldErrors = HashMap<String, String>;

/// Accumulates field errors while a payload is being checked.
///
/// Only the first message recorded for a field is kept; later messages for
/// the same field are dropped. One instance belongs to one request and is
/// not meant to be shared between threads without a lock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            errors: FieldErrors::new(),
        }
    }

    /// True when no field error has been recorded
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` for `field` unless the field already has an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        match self.errors.entry(field.into()) {
            Entry::Occupied(entry) => {
                tracing::trace!(field = %entry.key(), "duplicate validation error ignored");
            }
            Entry::Vacant(entry) => {
                tracing::debug!(field = %entry.key(), "validation error recorded");
                entry.insert(message.into());
            }
        }
    }

    /// Record `message` for `field` when `ok` is false
    pub fn check(&mut self, ok: bool, field: impl Into<String>, message: impl Into<String>) {
        if !ok {
            self.add_error(field, message);
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// Finish validation, turning any recorded errors into a `ValidationError`
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            return Ok(());
        }

        tracing::debug!(error_count = self.errors.len(), "validation failed");
        Err(ValidationError::from(self.errors))
    }
}

impl From<FieldErrors> for Validator {
    fn from(errors: FieldErrors) -> Self {
        Self { errors }
    }
}

impl From<Option<FieldErrors>> for Validator {
    fn from(errors: Option<FieldErrors>) -> Self {
        errors.map(Self::from).unwrap_or_default()
    }
}
