//! Named datasets exchanged with the table store.

use serde::{Deserialize, Serialize};

/// The tabular datasets the core consumes and produces.
///
/// `table_name` values match the original on-disk layout
/// (`data/dim_product.csv` etc.), so a CSV-backed store stays drop-in
/// compatible with existing exports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// Product catalog: one row per sellable offer.
    Products,
    /// Order facts: one row per order line.
    Orders,
    /// Account directory: scoping/display only.
    Accounts,
    /// Derived output: the classified SKU table.
    Classification,
}

impl Dataset {
    pub fn table_name(&self) -> &'static str {
        match self {
            Dataset::Products => "dim_product",
            Dataset::Orders => "fact_orders",
            Dataset::Accounts => "dim_account",
            Dataset::Classification => "abc",
        }
    }
}

impl core::fmt::Display for Dataset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.table_name())
    }
}
