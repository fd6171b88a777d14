//! Catalog domain types.

use kasira_shared::types::{CustomerId, ProductId, SupplierId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product with its canonical sale price and purchase cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identity.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Canonical unit price for sales entries.
    pub unit_price: Decimal,
    /// Canonical unit cost for purchase entries.
    pub unit_cost: Decimal,
}

/// A customer record, consumed only for display alongside sales entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identity.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Contact phone, if known.
    #[serde(default)]
    pub phone: Option<String>,
    /// Address, if known.
    #[serde(default)]
    pub address: Option<String>,
}

/// A supplier record, the purchase-side mirror of [`Customer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Supplier identity.
    pub id: SupplierId,
    /// Display name.
    pub name: String,
    /// Contact phone, if known.
    #[serde(default)]
    pub phone: Option<String>,
    /// Address, if known.
    #[serde(default)]
    pub address: Option<String>,
}

/// Seed data for building an [`super::InMemoryCatalog`], e.g. from a JSON
/// file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    /// Products to load.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Customers to load.
    #[serde(default)]
    pub customers: Vec<Customer>,
    /// Suppliers to load.
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}
