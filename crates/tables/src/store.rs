//! Table store abstraction.

use std::sync::Arc;

use abcrank_core::{AccountRecord, ClassifiedRow, OrderRecord, ProductRecord};

use crate::error::StoreResult;

/// Named-table storage the core reads inputs from and writes derived
/// results to. No business logic lives behind this trait.
///
/// Loading a dataset that does not exist yet yields an empty vector, not an
/// error; the classifier treats an empty catalog as "no rows to classify".
pub trait TableStore: Send + Sync {
    fn load_products(&self) -> StoreResult<Vec<ProductRecord>>;
    fn load_orders(&self) -> StoreResult<Vec<OrderRecord>>;
    fn load_accounts(&self) -> StoreResult<Vec<AccountRecord>>;

    /// Persist the derived classification table (whole-table replace).
    fn save_classification(&self, rows: &[ClassifiedRow]) -> StoreResult<()>;
}

impl<S> TableStore for Arc<S>
where
    S: TableStore + ?Sized,
{
    fn load_products(&self) -> StoreResult<Vec<ProductRecord>> {
        (**self).load_products()
    }

    fn load_orders(&self) -> StoreResult<Vec<OrderRecord>> {
        (**self).load_orders()
    }

    fn load_accounts(&self) -> StoreResult<Vec<AccountRecord>> {
        (**self).load_accounts()
    }

    fn save_classification(&self, rows: &[ClassifiedRow]) -> StoreResult<()> {
        (**self).save_classification(rows)
    }
}
