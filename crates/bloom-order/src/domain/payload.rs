//! Order payload - wire representation of a submitted order

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ToppingCatalog;
use crate::domain::schema::{FULL_NAME, SIZE};
use crate::domain::value_objects::FormValues;

/// Body POSTed to the order-intake service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub full_name: String,
    pub size: String,
    /// Topping ids in catalog order
    pub toppings: Vec<String>,
}

impl OrderPayload {
    /// Project form values onto the wire shape
    ///
    /// Toppings follow the catalog order, never the order they were ticked.
    pub fn build(values: &FormValues, catalog: &ToppingCatalog) -> Self {
        Self {
            full_name: values.text(FULL_NAME).trim().to_string(),
            size: values.text(SIZE).to_string(),
            toppings: catalog
                .iter()
                .filter(|t| values.flag(&t.field))
                .map(|t| t.id.clone())
                .collect(),
        }
    }
}

/// Affirmative answer from the order-intake service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::FormSchema;

    fn values(pairs: &[(&str, crate::FieldValue)]) -> FormValues {
        let mut values = FormSchema::order_form(&ToppingCatalog::standard()).initial_values();
        for (field, value) in pairs {
            values.set(field, value.clone());
        }
        values
    }

    #[test]
    fn test_toppings_follow_catalog_order() {
        // ham ticked before pepperoni
        let values = values(&[
            ("fullName", "Ann Lee".into()),
            ("size", "L".into()),
            ("ham", true.into()),
            ("pepperoni", true.into()),
        ]);
        let payload = OrderPayload::build(&values, &ToppingCatalog::standard());
        assert_eq!(
            payload,
            OrderPayload {
                full_name: "Ann Lee".into(),
                size: "L".into(),
                toppings: vec!["1".into(), "5".into()],
            }
        );
    }

    #[test]
    fn test_unticked_toppings_left_out() {
        let values = values(&[
            ("fullName", "Ann".into()),
            ("size", "S".into()),
            ("pineapple", true.into()),
            ("pineapple", false.into()),
        ]);
        let payload = OrderPayload::build(&values, &ToppingCatalog::standard());
        assert!(payload.toppings.is_empty());
    }

    #[test]
    fn test_name_is_trimmed() {
        let values = values(&[("fullName", "  Ann Lee ".into()), ("size", "M".into())]);
        let payload = OrderPayload::build(&values, &ToppingCatalog::standard());
        assert_eq!(payload.full_name, "Ann Lee");
    }

    #[test]
    fn test_wire_format() {
        let payload = OrderPayload {
            full_name: "Ann Lee".into(),
            size: "L".into(),
            toppings: vec!["1".into(), "5".into()],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fullName": "Ann Lee", "size": "L", "toppings": ["1", "5"] })
        );
    }
}
