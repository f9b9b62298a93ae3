//! Toppings command

use anyhow::Result;
use bloom_order::ToppingCatalog;
use serde::Serialize;
use tabled::Tabled;

use super::Settings;

#[derive(Debug, Serialize, Tabled)]
pub struct ToppingRow {
    pub id: String,
    pub label: String,
    /// Value to pass to `order --topping`
    pub field: String,
}

pub fn rows(catalog: &ToppingCatalog) -> Vec<ToppingRow> {
    catalog
        .iter()
        .map(|t| ToppingRow { id: t.id.clone(), label: t.label.clone(), field: t.field.clone() })
        .collect()
}

pub fn handle(settings: &Settings) -> Result<()> {
    settings.format.print_rows(&rows(&ToppingCatalog::standard()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_in_catalog_order() {
        let rows = rows(&ToppingCatalog::standard());
        let fields: Vec<_> = rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, vec!["pepperoni", "greenPeppers", "pineapple", "mushrooms", "ham"]);
        assert_eq!(rows[1].label, "Green Peppers");
    }
}
