//! In-memory table store for tests and fixtures.

use std::sync::RwLock;

use abcrank_core::{AccountRecord, ClassifiedRow, OrderRecord, ProductRecord};

use crate::error::StoreResult;
use crate::store::TableStore;

#[derive(Debug, Default)]
struct Tables {
    products: Vec<ProductRecord>,
    orders: Vec<OrderRecord>,
    accounts: Vec<AccountRecord>,
    classification: Vec<ClassifiedRow>,
}

/// In-memory [`TableStore`]. Each loaded table is an independent copy, so
/// concurrent classification runs never share mutable rows.
#[derive(Debug, Default)]
pub struct MemoryTableStore {
    inner: RwLock<Tables>,
}

impl MemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(self, products: Vec<ProductRecord>) -> Self {
        if let Ok(mut tables) = self.inner.write() {
            tables.products = products;
        }
        self
    }

    pub fn with_orders(self, orders: Vec<OrderRecord>) -> Self {
        if let Ok(mut tables) = self.inner.write() {
            tables.orders = orders;
        }
        self
    }

    pub fn with_accounts(self, accounts: Vec<AccountRecord>) -> Self {
        if let Ok(mut tables) = self.inner.write() {
            tables.accounts = accounts;
        }
        self
    }

    /// The last saved classification table.
    pub fn classification(&self) -> Vec<ClassifiedRow> {
        self.inner
            .read()
            .map(|tables| tables.classification.clone())
            .unwrap_or_default()
    }
}

impl TableStore for MemoryTableStore {
    fn load_products(&self) -> StoreResult<Vec<ProductRecord>> {
        Ok(self
            .inner
            .read()
            .map(|tables| tables.products.clone())
            .unwrap_or_default())
    }

    fn load_orders(&self) -> StoreResult<Vec<OrderRecord>> {
        Ok(self
            .inner
            .read()
            .map(|tables| tables.orders.clone())
            .unwrap_or_default())
    }

    fn load_accounts(&self) -> StoreResult<Vec<AccountRecord>> {
        Ok(self
            .inner
            .read()
            .map(|tables| tables.accounts.clone())
            .unwrap_or_default())
    }

    fn save_classification(&self, rows: &[ClassifiedRow]) -> StoreResult<()> {
        if let Ok(mut tables) = self.inner.write() {
            tables.classification = rows.to_vec();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abcrank_core::{AccountId, CanonicalSku, OfferId};

    fn sample_product() -> ProductRecord {
        ProductRecord {
            offer_id: OfferId::from("OF-1"),
            canonical_sku: CanonicalSku::from("SKU-1"),
            account_id: AccountId::new(10),
            created_at: "2025-01-01".to_string(),
            family: "Shoes".to_string(),
            title: "Runner".to_string(),
            reviews_count: 0,
            rating_value: 0.0,
        }
    }

    #[test]
    fn empty_store_loads_empty_tables() {
        let store = MemoryTableStore::new();
        assert!(store.load_products().unwrap().is_empty());
        assert!(store.load_orders().unwrap().is_empty());
        assert!(store.load_accounts().unwrap().is_empty());
    }

    #[test]
    fn loads_are_independent_copies() {
        let store = MemoryTableStore::new().with_products(vec![sample_product()]);
        let mut first = store.load_products().unwrap();
        first[0].family = "mutated".to_string();
        let second = store.load_products().unwrap();
        assert_eq!(second[0].family, "Shoes");
    }
}
