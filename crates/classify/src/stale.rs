//! Stale-product (dead stock) detection.
//!
//! A SKU is stale when all four conditions hold at once:
//! - *old*: its oldest listing predates the calendar-month cutoff,
//! - *never recently transacted*: no order in the configured year,
//! - *never delivered*: no order ever reached the delivered state,
//! - *zero engagement*: summed reviews and ratings are both exactly zero.
//!
//! Any one live signal rescues an aged SKU.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use abcrank_core::{CanonicalSku, OfferId, StalenessPolicy};

use crate::normalize::{OrderFacts, ProductFacts};

pub(crate) fn stale_skus(
    products: &[ProductFacts],
    orders: &[OrderFacts],
    today: NaiveDate,
    policy: &StalenessPolicy,
    delivered_status: &str,
) -> BTreeSet<CanonicalSku> {
    if products.is_empty() {
        return BTreeSet::new();
    }

    // Oldest listing date per SKU.
    let mut oldest: BTreeMap<&CanonicalSku, NaiveDateTime> = BTreeMap::new();
    for product in products {
        oldest
            .entry(&product.canonical_sku)
            .and_modify(|first| {
                if product.created_at < *first {
                    *first = product.created_at;
                }
            })
            .or_insert(product.created_at);
    }

    // Strictly before the cutoff, in calendar months (not a day count).
    let cutoff = today
        .checked_sub_months(Months::new(policy.age_months))
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN);
    let old: BTreeSet<CanonicalSku> = oldest
        .iter()
        .filter(|(_, first)| **first < cutoff)
        .map(|(sku, _)| (*sku).clone())
        .collect();

    // Orders join to SKUs via offer_id; order lines referencing offers the
    // catalog does not know simply drop out of these sets.
    let sku_by_offer: HashMap<&OfferId, &CanonicalSku> = products
        .iter()
        .map(|p| (&p.offer_id, &p.canonical_sku))
        .collect();

    let recently_transacted: BTreeSet<CanonicalSku> = orders
        .iter()
        .filter(|order| order.created_at.year() == policy.recent_year)
        .filter_map(|order| sku_by_offer.get(&order.offer_id).map(|sku| (*sku).clone()))
        .collect();

    let ever_delivered: BTreeSet<CanonicalSku> = orders
        .iter()
        .filter(|order| order.status == delivered_status)
        .filter_map(|order| sku_by_offer.get(&order.offer_id).map(|sku| (*sku).clone()))
        .collect();

    // Engagement is summed across all offers of a SKU; both sums must be
    // exactly zero to qualify.
    let mut engagement: BTreeMap<&CanonicalSku, (i64, f64)> = BTreeMap::new();
    for product in products {
        let totals = engagement.entry(&product.canonical_sku).or_insert((0, 0.0));
        totals.0 += product.reviews_count;
        totals.1 += product.rating_value;
    }
    let zero_engagement: BTreeSet<CanonicalSku> = engagement
        .iter()
        .filter(|(_, totals)| totals.0 == 0 && totals.1 == 0.0)
        .map(|(sku, _)| (*sku).clone())
        .collect();

    // Subtract the live-trade signals first, then intersect with the
    // zero-engagement set.
    let aged_and_inactive = &(&old - &recently_transacted) - &ever_delivered;
    let stale = &aged_and_inactive & &zero_engagement;

    debug!(
        old = old.len(),
        recently_transacted = recently_transacted.len(),
        ever_delivered = ever_delivered.len(),
        zero_engagement = zero_engagement.len(),
        stale = stale.len(),
        "stale-product detection"
    );
    stale
}
