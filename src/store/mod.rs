//! Data store modules for product persistence

pub mod memory;
pub mod mongo;
pub mod product;

pub use memory::InMemoryProductStore;
pub use mongo::MongoProductStore;
pub use product::{NewProduct, Product, ProductStore, StoreError};
