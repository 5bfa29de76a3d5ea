//! Input and output record types.
//!
//! Input records mirror the source tables column-for-column, with
//! `created_at` kept as raw text: normalization into a typed timestamp
//! happens in the classifier's own working copy, never in the loaded rows
//! (the same table may be reused across calls).

use serde::{Deserialize, Serialize};

use crate::id::{AccountId, CanonicalSku, OfferId};
use crate::policy::Tier;

/// One row of the product catalog: a single sellable offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub offer_id: OfferId,
    pub canonical_sku: CanonicalSku,
    pub account_id: AccountId,
    pub created_at: String,
    pub family: String,
    pub title: String,
    pub reviews_count: i64,
    pub rating_value: f64,
}

/// One row of the order facts table: a single order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub offer_id: OfferId,
    pub account_id: AccountId,
    pub created_at: String,
    /// Free-text order-lifecycle label; only the delivered state counts
    /// toward revenue.
    pub status: String,
    pub revenue: f64,
}

/// One row of the account directory. Display/scoping only, never
/// transformed by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub account_id: AccountId,
    pub name: String,
}

/// One classified SKU: the classifier's output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRow {
    pub canonical_sku: CanonicalSku,
    pub family: String,
    pub title: String,
    /// Total delivered revenue for this SKU.
    pub revenue: f64,
    /// `revenue / total` over the (filtered) catalog, 0 when the total is 0.
    pub share: f64,
    /// Running sum of `share` in revenue-descending order.
    pub cumshare: f64,
    pub tier: Tier,
}
