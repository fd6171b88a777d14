//! Pre-loaded catalog lookups.
//!
//! The entry engine never fetches anything on demand: products, customers,
//! and suppliers are loaded into memory before a session opens, and lookups
//! are synchronous. A miss is not an error - the engine simply leaves the
//! affected field unchanged.

pub mod service;
pub mod types;

pub use service::InMemoryCatalog;
pub use types::{CatalogSeed, Customer, Product, Supplier};
