use std::fmt;

use serde::Serialize;

use crate::validator::FieldErrors;

/// Field errors collected by a failed validation, ready to hand back to a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationError {
    pub errors: FieldErrors,
}

impl ValidationError {
    /// Create a validation error with a single field and message
    pub fn new(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), message.to_string());
        Self { errors }
    }

    /// Combine two validation errors. A field already present keeps its message.
    pub fn combine(mut self, other: ValidationError) -> Self {
        for (field, message) in other.errors {
            self.errors.entry(field).or_insert(message);
        }
        self
    }

    /// `(field, message)` pairs ordered by field name
    pub fn messages(&self) -> Vec<(&str, &str)> {
        let mut messages: Vec<(&str, &str)> = self
            .errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
            .collect();
        messages.sort_unstable_by_key(|(field, _)| *field);
        messages
    }

    /// Get a comma-separated list of all error messages
    pub fn to_string_list(&self) -> String {
        self.messages()
            .into_iter()
            .map(|(_, message)| message)
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl From<FieldErrors> for ValidationError {
    fn from(errors: FieldErrors) -> Self {
        Self { errors }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}

impl std::error::Error for ValidationError {}
