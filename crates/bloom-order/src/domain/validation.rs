//! Validation engine
//!
//! Applies a `FormSchema` to values. Each field is checked on its own; no
//! rule looks at another field.

use thiserror::Error;

use crate::domain::schema::{FieldKind, FieldSchema, FormSchema, Rule};
use crate::domain::value_objects::{FieldValue, FormValues};
use crate::error::FormError;

/// Why a single field failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value broke a rule; carries the user-facing message
    #[error("{0}")]
    Violation(String),

    /// Schema misuse, not something to show the user
    #[error(transparent)]
    Schema(#[from] FormError),
}

/// Stateless rule interpreter over a schema
#[derive(Clone, Copy, Debug)]
pub struct Validator<'s> {
    schema: &'s FormSchema,
}

impl<'s> Validator<'s> {
    pub fn new(schema: &'s FormSchema) -> Self {
        Self { schema }
    }

    /// Check one field, returning the first failing rule's message
    pub fn validate_field(&self, name: &str, value: &FieldValue) -> Result<(), ValidationError> {
        let field = self.schema.field(name)?;
        check(field, value).map_err(ValidationError::Violation)
    }

    /// Whether every schema field holds a passing value
    pub fn validate_all(&self, values: &FormValues) -> bool {
        self.schema.fields().iter().all(|field| match values.get(&field.name) {
            Some(value) => check(field, value).is_ok(),
            None => false,
        })
    }
}

fn check(field: &FieldSchema, value: &FieldValue) -> Result<(), String> {
    match (field.kind, value) {
        (FieldKind::Text | FieldKind::Enum, FieldValue::Text(raw)) => {
            let text = if field.trim { raw.trim() } else { raw.as_str() };
            field.rules.iter().try_for_each(|rule| check_text(rule, text))
        }
        (FieldKind::Boolean, FieldValue::Flag(_)) => Ok(()),
        _ => Err(field.type_message.clone()),
    }
}

fn check_text(rule: &Rule, text: &str) -> Result<(), String> {
    let passed = match rule {
        Rule::Required { .. } => !text.is_empty(),
        Rule::MinLength { min, .. } => text.chars().count() >= *min,
        Rule::MaxLength { max, .. } => text.chars().count() <= *max,
        Rule::OneOf { allowed, .. } => allowed.iter().any(|a| a == text),
    };
    if passed {
        Ok(())
    } else {
        Err(rule.message().to_string())
    }
}
