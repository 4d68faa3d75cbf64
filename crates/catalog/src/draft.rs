//! Locally created products (the "create product" form).

use appshop_core::{
    DEFAULT_MIN_TEXT_LEN, FieldError, check_field, validate_input_text, validate_int_field,
};

use crate::product::Product;

/// Raw form input for a new product. Every field is kept as typed text until
/// validation passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub code: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Check every field, collecting all failures so the form can flag them at
    /// once. On success returns the parsed price.
    pub fn validate(&self) -> Result<i64, Vec<FieldError>> {
        let mut errors = Vec::new();

        let text_fields = [
            ("name", "Name", &self.name),
            ("description", "Description", &self.description),
            ("code", "Code", &self.code),
        ];
        for (field, label, value) in text_fields {
            if let Err(err) = check_field(
                field,
                validate_input_text(label, value, DEFAULT_MIN_TEXT_LEN),
            ) {
                errors.push(err);
            }
        }

        let price = check_field("price", validate_int_field("Price", &self.price, 0));

        match price {
            Ok(price) if errors.is_empty() => Ok(price),
            Ok(_) => Err(errors),
            Err(err) => {
                errors.push(err);
                Err(errors)
            }
        }
    }

    pub fn into_product(self) -> Result<Product, Vec<FieldError>> {
        let price = self.validate()?;
        Ok(Product {
            code: self.code.trim().to_string(),
            category: self.category.trim().to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            image_url: self.image_url.unwrap_or_default(),
        })
    }
}

/// In-memory list of products created on this device.
#[derive(Debug, Clone, Default)]
pub struct LocalCatalog {
    products: Vec<Product>,
}

impl LocalCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a draft, returning the stored product.
    pub fn save(&mut self, draft: ProductDraft) -> Result<&Product, Vec<FieldError>> {
        let product = draft.into_product()?;
        tracing::info!(code = %product.code, "saved local product");
        self.products.push(product);
        Ok(&self.products[self.products.len() - 1])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            code: "TC003".to_string(),
            category: "Tortas Circulares".to_string(),
            name: " Torta de Vainilla ".to_string(),
            description: "Bizcocho de vainilla".to_string(),
            price: "42000".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn valid_draft_becomes_trimmed_product() {
        let product = valid_draft().into_product().unwrap();
        assert_eq!(product.name, "Torta de Vainilla");
        assert_eq!(product.price, 42000);
        assert_eq!(product.image_url, "");
    }

    #[test]
    fn collects_every_field_error() {
        let draft = ProductDraft {
            name: "ab".to_string(),
            price: "abc".to_string(),
            ..Default::default()
        };

        let errors = draft.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "description", "code", "price"]);
        assert_eq!(errors[0].message, "Name must be at least 3 characters");
        assert_eq!(errors[1].message, "Description is required");
        assert_eq!(errors[3].message, "Price must be an integer");
    }

    #[test]
    fn local_catalog_only_keeps_valid_products() {
        let mut catalog = LocalCatalog::new();

        let saved = catalog.save(valid_draft()).unwrap().clone();
        assert!(catalog.save(ProductDraft::default()).is_err());

        assert_eq!(catalog.products(), &[saved]);
    }
}
