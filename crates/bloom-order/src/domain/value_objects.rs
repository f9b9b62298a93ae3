//! Value Objects - form values, errors and identifiers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Current value of a single field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// Field name to current value
///
/// Only the form aggregate mutates this.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormValues(HashMap<String, FieldValue>);

impl FormValues {
    pub(crate) fn from_pairs(pairs: impl IntoIterator<Item = (String, FieldValue)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    pub(crate) fn set(&mut self, field: &str, value: FieldValue) {
        self.0.insert(field.to_string(), value);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Text value of a field, empty when unset or not text
    pub fn text(&self, field: &str) -> &str {
        self.get(field).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Flag value of a field, false when unset or not a flag
    pub fn flag(&self, field: &str) -> bool {
        self.get(field).and_then(FieldValue::as_flag).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Field name to current error message, empty string meaning no error
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(HashMap<String, String>);

impl FormErrors {
    pub(crate) fn cleared<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        Self(fields.into_iter().map(|f| (f.to_string(), String::new())).collect())
    }

    pub(crate) fn set(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub(crate) fn clear(&mut self, field: &str) {
        self.set(field, String::new());
    }

    /// Error for a field, empty when there is none
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn has_error(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.0.values().any(|m| !m.is_empty())
    }
}

/// Pizza size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Code carried in the form value and the order payload
    pub fn code(&self) -> &'static str {
        match self {
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Identifies one submit attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_conversions() {
        assert_eq!(FieldValue::from("Ann"), FieldValue::Text("Ann".into()));
        assert_eq!(FieldValue::from(true), FieldValue::Flag(true));
        assert_eq!(FieldValue::Text("x".into()).as_flag(), None);
        assert_eq!(FieldValue::Flag(true).as_text(), None);
    }

    #[test]
    fn test_form_errors() {
        let mut errors = FormErrors::cleared(["fullName", "size"]);
        assert!(!errors.has_errors());

        errors.set("size", "Size is required");
        assert!(errors.has_error("size"));
        assert_eq!(errors.get("size"), "Size is required");

        errors.clear("size");
        assert_eq!(errors.get("size"), "");
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_size_codes() {
        assert_eq!(Size::Large.code(), "L");
        assert_eq!(Size::Small.to_string(), "Small");
    }

    #[test]
    fn test_submission_ids_are_unique() {
        assert_ne!(SubmissionId::new(), SubmissionId::new());
    }
}
