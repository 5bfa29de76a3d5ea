//! A/B/C revenue classification.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{debug, info};

use abcrank_core::{
    AccountId, CanonicalSku, ClassifiedRow, ClassifyPolicy, Clock, OfferId, OrderRecord,
    ProductRecord, Tier,
};

use crate::normalize::{self, OrderFacts, ProductFacts};
use crate::stale;

/// Pareto-style classifier over the product catalog and order facts.
///
/// Stateless across invocations; holds only the injected clock and the
/// classification policy. Identical inputs (plus an identical run date)
/// always produce identical output.
pub struct AbcClassifier {
    clock: Arc<dyn Clock>,
    policy: ClassifyPolicy,
}

impl AbcClassifier {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            policy: ClassifyPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ClassifyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &ClassifyPolicy {
        &self.policy
    }

    /// Canonical SKUs considered commercially dead.
    ///
    /// Pure function of the two tables and the injected run date. Fails
    /// only on unparseable `created_at` values.
    pub fn detect_stale(
        &self,
        products: &[ProductRecord],
        orders: &[OrderRecord],
    ) -> abcrank_core::DomainResult<BTreeSet<CanonicalSku>> {
        let product_refs: Vec<&ProductRecord> = products.iter().collect();
        let order_refs: Vec<&OrderRecord> = orders.iter().collect();
        let products = normalize::products(&product_refs)?;
        let orders = normalize::orders(&order_refs)?;
        Ok(stale::stale_skus(
            &products,
            &orders,
            self.clock.today(),
            &self.policy.staleness,
            &self.policy.delivered_status,
        ))
    }

    /// Classify every SKU of the (optionally account-scoped) catalog.
    ///
    /// Returns one row per distinct `canonical_sku`, SKU-ascending. SKUs
    /// with no delivered revenue default to tier C; SKUs detected as stale
    /// are forced into C regardless of their computed tier.
    pub fn classify(
        &self,
        products: &[ProductRecord],
        orders: &[OrderRecord],
        account_filter: Option<AccountId>,
    ) -> abcrank_core::DomainResult<Vec<ClassifiedRow>> {
        let product_refs: Vec<&ProductRecord> = match account_filter {
            Some(account) => products
                .iter()
                .filter(|p| p.account_id == account)
                .collect(),
            None => products.iter().collect(),
        };
        let order_refs: Vec<&OrderRecord> = match account_filter {
            Some(account) => orders.iter().filter(|o| o.account_id == account).collect(),
            None => orders.iter().collect(),
        };

        // An empty (possibly freshly-scoped) catalog is a legitimate steady
        // state, not an error.
        if product_refs.is_empty() {
            debug!(?account_filter, "empty catalog, nothing to classify");
            return Ok(Vec::new());
        }

        let products = normalize::products(&product_refs)?;
        let orders = normalize::orders(&order_refs)?;
        let stale = stale::stale_skus(
            &products,
            &orders,
            self.clock.today(),
            &self.policy.staleness,
            &self.policy.delivered_status,
        );
        Ok(self.rank(&products, &orders, &stale))
    }

    fn rank(
        &self,
        products: &[ProductFacts],
        orders: &[OrderFacts],
        stale: &BTreeSet<CanonicalSku>,
    ) -> Vec<ClassifiedRow> {
        let sku_by_offer: HashMap<&OfferId, &CanonicalSku> = products
            .iter()
            .map(|p| (&p.offer_id, &p.canonical_sku))
            .collect();

        // Delivered revenue per SKU. Order lines referencing unknown offers
        // drop out of the aggregation.
        let mut revenue_by_sku: BTreeMap<CanonicalSku, f64> = BTreeMap::new();
        for order in orders
            .iter()
            .filter(|o| o.status == self.policy.delivered_status)
        {
            if let Some(sku) = sku_by_offer.get(&order.offer_id) {
                *revenue_by_sku.entry((*sku).clone()).or_insert(0.0) += order.revenue;
            }
        }

        // Revenue-descending; the stable sort keeps SKU order within ties.
        let mut ranked: Vec<(CanonicalSku, f64)> = revenue_by_sku.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let total: f64 = ranked.iter().map(|(_, revenue)| revenue).sum();

        // A zero total degrades to all-zero shares rather than dividing.
        let mut cumshare = 0.0;
        let mut computed: HashMap<CanonicalSku, (f64, f64, f64, Tier)> = HashMap::new();
        for (sku, revenue) in ranked {
            let share = if total > 0.0 { revenue / total } else { 0.0 };
            cumshare += share;
            let tier = self.policy.tiers.tier_for(cumshare);
            computed.insert(sku, (revenue, share, cumshare, tier));
        }

        // Full SKU universe from the catalog, first offer's metadata per
        // SKU. A SKU that never sold defaults to C, never to undefined.
        let mut meta: BTreeMap<&CanonicalSku, (&str, &str)> = BTreeMap::new();
        for product in products {
            meta.entry(&product.canonical_sku)
                .or_insert((product.family.as_str(), product.title.as_str()));
        }

        let mut rows = Vec::with_capacity(meta.len());
        for (sku, (family, title)) in meta {
            let (revenue, share, cumshare, tier) = computed
                .remove(sku)
                .unwrap_or((0.0, 0.0, 0.0, Tier::C));
            // One-directional override: staleness can only move a row into C.
            let tier = if stale.contains(sku) { Tier::C } else { tier };
            rows.push(ClassifiedRow {
                canonical_sku: sku.clone(),
                family: family.to_string(),
                title: title.to_string(),
                revenue,
                share,
                cumshare,
                tier,
            });
        }

        info!(
            rows = rows.len(),
            stale = stale.len(),
            total_revenue = total,
            "classified catalog"
        );
        rows
    }
}
