//! In-memory catalog with synchronous lookups.

use std::collections::HashMap;

use kasira_shared::types::{CustomerId, ProductId, SupplierId};
use rust_decimal::Decimal;

use super::types::{CatalogSeed, Customer, Product, Supplier};
use crate::entry::TransactionKind;

/// Pre-loaded product/customer/supplier catalog.
///
/// Built once before entry sessions open; all lookups are synchronous map
/// reads. The catalog is never mutated by the engine.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<ProductId, Product>,
    customers: HashMap<CustomerId, Customer>,
    suppliers: HashMap<SupplierId, Supplier>,
}

impl InMemoryCatalog {
    /// Builds a catalog from seed data.
    #[must_use]
    pub fn from_seed(seed: CatalogSeed) -> Self {
        Self {
            products: seed.products.into_iter().map(|p| (p.id, p)).collect(),
            customers: seed.customers.into_iter().map(|c| (c.id, c)).collect(),
            suppliers: seed.suppliers.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Parses a catalog from a JSON seed document.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let seed: CatalogSeed = serde_json::from_str(json)?;
        Ok(Self::from_seed(seed))
    }

    /// Looks up a product record.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Resolves a product to its canonical sale price.
    #[must_use]
    pub fn unit_price(&self, id: ProductId) -> Option<Decimal> {
        self.products.get(&id).map(|p| p.unit_price)
    }

    /// Resolves a product to its canonical purchase cost.
    #[must_use]
    pub fn unit_cost(&self, id: ProductId) -> Option<Decimal> {
        self.products.get(&id).map(|p| p.unit_cost)
    }

    /// Returns the resolver closure an entry session of the given kind
    /// should use: price for sales, cost for purchases.
    pub fn resolver(&self, kind: TransactionKind) -> impl Fn(ProductId) -> Option<Decimal> + '_ {
        move |id| match kind {
            TransactionKind::Sale => self.unit_price(id),
            TransactionKind::Purchase => self.unit_cost(id),
        }
    }

    /// Looks up a customer record (display only; totals never consume it).
    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// Looks up a supplier record (display only).
    #[must_use]
    pub fn supplier(&self, id: SupplierId) -> Option<&Supplier> {
        self.suppliers.get(&id)
    }

    /// Number of loaded products.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Iterates over the loaded products (no particular order).
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_catalog() -> (InMemoryCatalog, ProductId, CustomerId) {
        let product = Product {
            id: ProductId::new(),
            name: "Kopi Susu".to_string(),
            unit_price: dec!(15000),
            unit_cost: dec!(9000),
        };
        let customer = Customer {
            id: CustomerId::new(),
            name: "Budi".to_string(),
            phone: Some("0812".to_string()),
            address: None,
        };
        let pid = product.id;
        let cid = customer.id;
        let catalog = InMemoryCatalog::from_seed(CatalogSeed {
            products: vec![product],
            customers: vec![customer],
            suppliers: vec![],
        });
        (catalog, pid, cid)
    }

    #[test]
    fn test_price_and_cost_resolution() {
        let (catalog, pid, _) = sample_catalog();
        assert_eq!(catalog.unit_price(pid), Some(dec!(15000)));
        assert_eq!(catalog.unit_cost(pid), Some(dec!(9000)));
        assert_eq!(catalog.unit_price(ProductId::new()), None);
    }

    #[test]
    fn test_resolver_follows_kind() {
        let (catalog, pid, _) = sample_catalog();
        assert_eq!(catalog.resolver(TransactionKind::Sale)(pid), Some(dec!(15000)));
        assert_eq!(
            catalog.resolver(TransactionKind::Purchase)(pid),
            Some(dec!(9000))
        );
    }

    #[test]
    fn test_customer_lookup() {
        let (catalog, _, cid) = sample_catalog();
        assert_eq!(catalog.customer(cid).map(|c| c.name.as_str()), Some("Budi"));
        assert!(catalog.customer(CustomerId::new()).is_none());
        assert!(catalog.supplier(SupplierId::new()).is_none());
    }

    #[test]
    fn test_from_json_seed() {
        let pid = ProductId::new();
        let json = format!(
            r#"{{"products": [{{"id": "{pid}", "name": "Teh Botol", "unit_price": "4500", "unit_cost": "3000"}}]}}"#
        );
        let catalog = InMemoryCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.product_count(), 1);
        assert_eq!(catalog.unit_price(pid), Some(dec!(4500)));
        assert_eq!(catalog.product(pid).map(|p| p.name.as_str()), Some("Teh Botol"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(InMemoryCatalog::from_json("not json").is_err());
    }
}
