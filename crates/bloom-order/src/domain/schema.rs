//! Field schema
//!
//! Declarative rule table for the order form. Each field carries an ordered
//! list of rules; the validation engine evaluates them in that order and
//! reports the first one that fails.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ToppingCatalog;
use crate::domain::value_objects::{FieldValue, FormValues, Size};
use crate::error::{FormError, FormResult};

/// Name field
pub const FULL_NAME: &str = "fullName";
/// Size field
pub const SIZE: &str = "size";

/// User-facing validation messages
pub mod messages {
    pub const FULL_NAME_REQUIRED: &str = "Full name is required";
    pub const FULL_NAME_TOO_SHORT: &str = "Full name must be at least 3 characters";
    pub const FULL_NAME_TOO_LONG: &str = "Full name must be at most 20 characters";
    pub const FULL_NAME_NOT_TEXT: &str = "Full name must be text";
    pub const SIZE_REQUIRED: &str = "Size is required";
    pub const SIZE_INCORRECT: &str = "Size must be S or M or L";
    pub const TOPPING_INCORRECT: &str = "Invalid topping selection";
}

/// Value type a field accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Enum,
    Boolean,
}

/// A single constraint with the message emitted when it fails
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    Required { message: String },
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    OneOf { allowed: Vec<String>, message: String },
}

impl Rule {
    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::OneOf { message, .. } => message,
        }
    }
}

/// Rules for one form field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub kind: FieldKind,
    /// Trim surrounding whitespace before text rules run
    pub trim: bool,
    /// Evaluated in order
    pub rules: Vec<Rule>,
    /// Emitted when the value has the wrong kind
    pub type_message: String,
}

impl FieldSchema {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        let type_message = format!("{} has an invalid value", name);
        Self { name, kind, trim: false, rules: Vec::new(), type_message }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Enum)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Required { message: message.into() });
        self
    }

    pub fn min_length(mut self, min: usize, message: impl Into<String>) -> Self {
        self.rules.push(Rule::MinLength { min, message: message.into() });
        self
    }

    pub fn max_length(mut self, max: usize, message: impl Into<String>) -> Self {
        self.rules.push(Rule::MaxLength { max, message: message.into() });
        self
    }

    pub fn one_of<I, S>(mut self, allowed: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed = allowed.into_iter().map(Into::into).collect();
        self.rules.push(Rule::OneOf { allowed, message: message.into() });
        self
    }

    pub fn type_message(mut self, message: impl Into<String>) -> Self {
        self.type_message = message.into();
        self
    }

    /// Value a freshly mounted form holds for this field
    pub fn initial_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text | FieldKind::Enum => FieldValue::Text(String::new()),
            FieldKind::Boolean => FieldValue::Flag(false),
        }
    }
}

/// Complete rule table of a form
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    /// Build a schema from field entries, one per field name
    pub fn new(fields: Vec<FieldSchema>) -> FormResult<Self> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(FormError::InvalidSchema(format!("duplicate schema field: {}", field.name)));
            }
        }
        Ok(Self { fields })
    }

    /// The pizza order form: name, size, and one flag per catalog topping
    ///
    /// Required is declared first on both text fields, so an empty value
    /// always reports the required message.
    pub fn order_form(catalog: &ToppingCatalog) -> Self {
        let mut fields = vec![
            FieldSchema::text(FULL_NAME)
                .trimmed()
                .required(messages::FULL_NAME_REQUIRED)
                .min_length(3, messages::FULL_NAME_TOO_SHORT)
                .max_length(20, messages::FULL_NAME_TOO_LONG)
                .type_message(messages::FULL_NAME_NOT_TEXT),
            FieldSchema::enumeration(SIZE)
                .required(messages::SIZE_REQUIRED)
                .one_of(Size::ALL.iter().map(|s| s.code()), messages::SIZE_INCORRECT)
                .type_message(messages::SIZE_INCORRECT),
        ];
        fields.extend(
            catalog
                .iter()
                .map(|t| FieldSchema::boolean(&t.field).type_message(messages::TOPPING_INCORRECT)),
        );
        // Catalog construction already rules out collisions with these names
        Self { fields }
    }

    pub fn field(&self, name: &str) -> FormResult<&FieldSchema> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Initial values: empty text, all flags off
    pub fn initial_values(&self) -> FormValues {
        FormValues::from_pairs(self.fields.iter().map(|f| (f.name.clone(), f.initial_value())))
    }
}
