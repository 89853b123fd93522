//! MongoDB-backed product store

use async_trait::async_trait;
use bson::doc;
use mongodb::{options::ClientOptions, Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{MongoConfig, PRODUCTS_COLLECTION};

use super::product::{NewProduct, Product, ProductStore, StoreError};

/// Product document as stored in the `products` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: bson::Uuid,
    pub name: String,
    pub tags: Vec<String>,
    pub tag_count: i64,
    pub description: String,
    pub created_at: String,
}

impl From<Product> for ProductDocument {
    fn from(product: Product) -> Self {
        Self {
            id: bson::Uuid::from_uuid_1(product.id),
            name: product.name,
            tags: product.tags,
            tag_count: product.tag_count,
            description: product.description,
            created_at: product.created_at,
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(document: ProductDocument) -> Self {
        Self {
            id: document.id.to_uuid_1(),
            name: document.name,
            tags: document.tags,
            tag_count: document.tag_count,
            description: document.description,
            created_at: document.created_at,
        }
    }
}

/// Product store operations against MongoDB.
///
/// Cloning is cheap; clones share the driver's connection pool.
#[derive(Clone)]
pub struct MongoProductStore {
    collection: Collection<ProductDocument>,
}

impl MongoProductStore {
    /// Connect, verify the server answers a ping, and open the collection
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        info!(uri = %config.redacted_connection_string(), "Connecting to MongoDB");

        let options = ClientOptions::parse(config.connection_string()).await?;
        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        database.run_command(doc! { "ping": 1 }, None).await?;

        info!(database = %config.database, "Connected to MongoDB");

        Ok(Self {
            collection: database.collection(PRODUCTS_COLLECTION),
        })
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn create(&self, product: NewProduct) -> Result<Product, StoreError> {
        let product = product.into_product();
        let document = ProductDocument::from(product.clone());

        let result = self.collection.insert_one(&document, None).await?;

        debug!(inserted_id = %result.inserted_id, "Product saved");
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, StoreError> {
        let filter = doc! { "_id": bson::Uuid::from_uuid_1(id) };

        self.collection
            .find_one(filter, None)
            .await?
            .map(Product::from)
            .ok_or(StoreError::NotFound)
    }

    async fn get_by_name(&self, name: &str) -> Result<Product, StoreError> {
        let filter = doc! { "name": name };

        self.collection
            .find_one(filter, None)
            .await?
            .map(Product::from)
            .ok_or(StoreError::NotFound)
    }
}
