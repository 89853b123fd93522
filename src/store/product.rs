//! Product records and the store contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::time::today;

/// A stored product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub tags: Vec<String>,
    pub tag_count: i64,
    pub description: String,
    /// Insertion date, `YYYY-MM-DD`
    pub created_at: String,
}

/// New product for insertion
///
/// Identity and creation date are assigned by the store, so they are not
/// part of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub tags: Vec<String>,
    pub tag_count: i64,
    pub description: String,
}

impl NewProduct {
    /// Stamp a fresh id and today's date onto the input
    pub fn into_product(self) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: self.name,
            tags: self.tags,
            tag_count: self.tag_count,
            description: self.description,
            created_at: today(),
        }
    }
}

/// Create/read access to product records.
///
/// Implementations are shared across request handlers and must tolerate
/// concurrent calls.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new product with a fresh identifier and creation date
    async fn create(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// Get a product by its identifier
    async fn get_by_id(&self, id: Uuid) -> Result<Product, StoreError>;

    /// Get the first product with the given name
    async fn get_by_name(&self, name: &str) -> Result<Product, StoreError>;
}

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Product not found")]
    NotFound,

    #[error("Persistence failure: {0}")]
    Persistence(#[from] mongodb::error::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            tag_count: 2,
            description: "x".to_string(),
        }
    }

    #[test]
    fn into_product_keeps_fields_and_stamps_identity() {
        let product = widget().into_product();

        assert!(!product.id.is_nil());
        assert_eq!(product.name, "Widget");
        assert_eq!(product.tags, vec!["a", "b"]);
        assert_eq!(product.tag_count, 2);
        assert_eq!(product.description, "x");
        assert_eq!(product.created_at, today());
    }

    #[test]
    fn identical_inputs_get_distinct_ids() {
        let first = widget().into_product();
        let second = widget().into_product();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn tag_count_is_not_checked() {
        let mut input = widget();
        input.tag_count = 7;

        assert_eq!(input.into_product().tag_count, 7);
    }

    #[test]
    fn json_shape_uses_snake_case_fields() {
        let product = widget().into_product();
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], product.id.to_string());
        assert_eq!(value["tag_count"], 2);
        assert_eq!(value["created_at"], product.created_at);
    }
}
