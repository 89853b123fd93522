//! Product Service - product persistence over MongoDB
//!
//! Exposes a `ProductStore` contract with a MongoDB implementation and an
//! in-memory one, plus the configuration and HTTP wiring used by the server
//! binary.

pub mod app;
pub mod config;
pub mod http;
pub mod store;
pub mod util;
