use serde::{Deserialize, Serialize};

use appshop_core::ValueObject;

/// A catalog product, as served by the storefront backend.
///
/// Products are value objects: equality and hashing cover **every** field.
/// The backend schema has no numeric identifier, so two products with the same
/// fields are interchangeable (and the cart treats them as one line).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Catalog code (e.g. "TC001").
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Unit price in smallest currency unit.
    #[serde(rename = "precio")]
    pub price: i64,
    /// Image reference (URL or local URI).
    #[serde(rename = "url")]
    pub image_url: String,
}

impl ValueObject for Product {}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: i64) -> Self {
        Self {
            code: code.into(),
            category: String::new(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

/// Format an amount in smallest currency unit for display, e.g. `$ 45.000`.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("$ -{grouped}")
    } else {
        format!("$ {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn decodes_backend_field_names() {
        let json = r#"{
            "codigo": "TC001",
            "categoria": "Tortas Cuadradas",
            "nombre": "Torta Cuadrada de Chocolate",
            "descripcion": "Torta de chocolate con ganache",
            "precio": 45000,
            "url": "https://example.com/chocolate.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.code, "TC001");
        assert_eq!(product.category, "Tortas Cuadradas");
        assert_eq!(product.price, 45000);
        assert_eq!(product.image_url, "https://example.com/chocolate.jpg");
    }

    #[test]
    fn equal_fields_mean_equal_products() {
        let a = Product::new("001", "Flan", 5).with_category("Postres");
        let b = Product::new("001", "Flan", 5).with_category("Postres");
        let c = Product::new("001", "Flan", 6).with_category("Postres");

        let set: HashSet<_> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0), "$ 0");
        assert_eq!(format_amount(999), "$ 999");
        assert_eq!(format_amount(45000), "$ 45.000");
        assert_eq!(format_amount(1_000_000), "$ 1.000.000");
        assert_eq!(format_amount(-1500), "$ -1.500");
    }

    proptest! {
        #[test]
        fn format_amount_keeps_every_digit(amount in 0i64..i64::MAX) {
            let formatted = format_amount(amount);
            let digits: String = formatted
                .trim_start_matches("$ ")
                .chars()
                .filter(|c| *c != '.')
                .collect();
            prop_assert_eq!(digits, amount.to_string());
        }
    }
}
