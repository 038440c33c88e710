//! Input limits for field bundles.
//!
//! Rendering never rejects data, but unbounded free text is refused at the
//! request boundary before any document is drawn.

use std::fmt;

use super::traits::Validator;
use crate::documents::bundle::FieldBundle;

/// Longest accepted field value, in characters.
pub const MAX_FIELD_CHARS: usize = 2_000;
/// Longest accepted field name.
pub const MAX_KEY_CHARS: usize = 128;
/// Most fields accepted in one bundle.
pub const MAX_FIELDS: usize = 1_000;

/// Validation error with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    pub message: String,
    /// Suggestion for how to fix the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn value_too_long(field: &str, length: usize) -> Self {
        Self::new(
            field,
            format!("value has {length} characters, the limit is {MAX_FIELD_CHARS}"),
        )
        .with_suggestion("Shorten the text; documents only show what fits on the form")
    }

    pub fn key_too_long(field: &str) -> Self {
        let shown: String = field.chars().take(32).collect();
        Self::new(
            format!("{shown}..."),
            format!("field name is longer than {MAX_KEY_CHARS} characters"),
        )
    }

    pub fn too_many_fields(count: usize) -> Self {
        Self::new("fields", format!("{count} fields supplied, the limit is {MAX_FIELDS}"))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Numbered list of every error, one per line.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "validation failed: {} problem(s) found",
            self.errors.len()
        )];
        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }
        parts.join("\n")
    }

    /// Convert to Result - Ok if no errors, Err with formatted message if errors exist
    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

/// Validate the length of one field.
pub fn validate_field_length(key: &str, value: &str, errors: &mut ValidationErrors) {
    if key.chars().count() > MAX_KEY_CHARS {
        errors.add(ValidationError::key_too_long(key));
    }

    let length = value.chars().count();
    if length > MAX_FIELD_CHARS {
        errors.add(ValidationError::value_too_long(key, length));
    }
}

impl Validator for FieldBundle {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        if self.len() > MAX_FIELDS {
            errors.add(ValidationError::too_many_fields(self.len()));
        }
        for (key, value) in self.iter() {
            validate_field_length(key, &value.as_text(), &mut errors);
        }

        errors.into_result()
    }
}
