//! In-memory product store for tests and local runs

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::product::{NewProduct, Product, ProductStore, StoreError};

/// Products kept in insertion order
#[derive(Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, product: NewProduct) -> Result<Product, StoreError> {
        let product = product.into_product();
        self.products.write().push(product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, StoreError> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_by_name(&self, name: &str) -> Result<Product, StoreError> {
        self.products
            .read()
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}
