//! Topping catalog
//!
//! Maps each boolean topping field of the form to the identifier the
//! order-intake service expects.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::schema::{FULL_NAME, SIZE};
use crate::error::{FormError, FormResult};

/// One selectable topping
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    /// Wire identifier sent in the order payload
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Boolean form field backing this topping
    pub field: String,
}

impl Topping {
    pub fn new(id: impl Into<String>, label: impl Into<String>, field: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), field: field.into() }
    }
}

/// Ordered, fixed list of toppings
///
/// # Invariants
/// - Field names are unique
/// - Field names never collide with `fullName` or `size`
/// - Wire identifiers are unique
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToppingCatalog {
    toppings: Vec<Topping>,
}

impl ToppingCatalog {
    /// Build a catalog, checking its invariants
    pub fn new(toppings: Vec<Topping>) -> FormResult<Self> {
        let mut fields = HashSet::new();
        let mut ids = HashSet::new();

        for topping in &toppings {
            if topping.field.is_empty() || topping.id.is_empty() {
                return Err(FormError::InvalidCatalog("topping id and field cannot be empty".into()));
            }
            if topping.field == FULL_NAME || topping.field == SIZE {
                return Err(FormError::InvalidCatalog(format!("reserved field name: {}", topping.field)));
            }
            if !fields.insert(topping.field.as_str()) {
                return Err(FormError::InvalidCatalog(format!("duplicate field: {}", topping.field)));
            }
            if !ids.insert(topping.id.as_str()) {
                return Err(FormError::InvalidCatalog(format!("duplicate id: {}", topping.id)));
            }
        }

        Ok(Self { toppings })
    }

    /// The Bloom Pizza menu
    pub fn standard() -> Self {
        Self {
            toppings: vec![
                Topping::new("1", "Pepperoni", "pepperoni"),
                Topping::new("2", "Green Peppers", "greenPeppers"),
                Topping::new("3", "Pineapple", "pineapple"),
                Topping::new("4", "Mushrooms", "mushrooms"),
                Topping::new("5", "Ham", "ham"),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topping> {
        self.toppings.iter()
    }

    pub fn len(&self) -> usize {
        self.toppings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toppings.is_empty()
    }

    /// Look up a topping by its form field
    pub fn by_field(&self, field: &str) -> Option<&Topping> {
        self.toppings.iter().find(|t| t.field == field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.by_field(field).is_some()
    }
}

impl Default for ToppingCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let standard = ToppingCatalog::standard();
        let checked = ToppingCatalog::new(standard.iter().cloned().collect()).unwrap();
        assert_eq!(checked, standard);
        assert_eq!(standard.len(), 5);
    }

    #[test]
    fn test_standard_catalog_order() {
        let ids: Vec<_> = ToppingCatalog::standard().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_lookup_by_field() {
        let catalog = ToppingCatalog::standard();
        assert_eq!(catalog.by_field("greenPeppers").unwrap().label, "Green Peppers");
        assert!(catalog.by_field("anchovies").is_none());
    }

    #[test]
    fn test_rejects_reserved_field() {
        let result = ToppingCatalog::new(vec![Topping::new("1", "Size", "size")]);
        assert!(matches!(result, Err(FormError::InvalidCatalog(_))));

        let result = ToppingCatalog::new(vec![Topping::new("1", "Name", "fullName")]);
        assert!(matches!(result, Err(FormError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_duplicates() {
        let dup_field = ToppingCatalog::new(vec![
            Topping::new("1", "Ham", "ham"),
            Topping::new("2", "More Ham", "ham"),
        ]);
        assert!(dup_field.is_err());

        let dup_id = ToppingCatalog::new(vec![
            Topping::new("1", "Ham", "ham"),
            Topping::new("1", "Olives", "olives"),
        ]);
        assert!(dup_id.is_err());
    }
}
