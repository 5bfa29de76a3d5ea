//! Working-copy normalization of the input tables.
//!
//! `created_at` arrives as raw text. The core parses it once into a typed
//! timestamp inside its own copy of the rows, leaving caller-owned records
//! untouched so the same table can be reused across calls. An unparseable
//! value is a reportable error, never a silent coercion to "now" or epoch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use abcrank_core::{
    CanonicalSku, Dataset, DomainError, DomainResult, OfferId, OrderRecord, ProductRecord,
};

/// Product row with a parsed timestamp.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProductFacts {
    pub offer_id: OfferId,
    pub canonical_sku: CanonicalSku,
    pub created_at: NaiveDateTime,
    pub family: String,
    pub title: String,
    pub reviews_count: i64,
    pub rating_value: f64,
}

/// Order row with a parsed timestamp.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OrderFacts {
    pub offer_id: OfferId,
    pub created_at: NaiveDateTime,
    pub status: String,
    pub revenue: f64,
}

pub(crate) fn products(rows: &[&ProductRecord]) -> DomainResult<Vec<ProductFacts>> {
    rows.iter()
        .map(|row| {
            Ok(ProductFacts {
                offer_id: row.offer_id.clone(),
                canonical_sku: row.canonical_sku.clone(),
                created_at: parse_timestamp(Dataset::Products, &row.created_at)?,
                family: row.family.clone(),
                title: row.title.clone(),
                reviews_count: row.reviews_count,
                rating_value: row.rating_value,
            })
        })
        .collect()
}

pub(crate) fn orders(rows: &[&OrderRecord]) -> DomainResult<Vec<OrderFacts>> {
    rows.iter()
        .map(|row| {
            Ok(OrderFacts {
                offer_id: row.offer_id.clone(),
                created_at: parse_timestamp(Dataset::Orders, &row.created_at)?,
                status: row.status.clone(),
                revenue: row.revenue,
            })
        })
        .collect()
}

/// Accepted timestamp shapes, most to least specific: RFC 3339,
/// `%Y-%m-%d %H:%M:%S`, bare `%Y-%m-%d` (midnight).
fn parse_timestamp(dataset: Dataset, raw: &str) -> DomainResult<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(DomainError::malformed_timestamp(dataset, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let ts = parse_timestamp(Dataset::Orders, "2025-03-04T12:30:00+03:00").unwrap();
        // Normalized to UTC.
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2025, 3, 4)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn parses_space_separated_datetime() {
        let ts = parse_timestamp(Dataset::Products, "2024-12-01 08:15:30").unwrap();
        assert_eq!(ts.time(), NaiveTime::from_hms_opt(8, 15, 30).unwrap());
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let ts = parse_timestamp(Dataset::Products, "2024-12-01").unwrap();
        assert_eq!(ts.time(), NaiveTime::MIN);
    }

    #[test]
    fn rejects_garbage_with_dataset_context() {
        let err = parse_timestamp(Dataset::Orders, "yesterday-ish").unwrap_err();
        assert_eq!(
            err,
            DomainError::malformed_timestamp(Dataset::Orders, "yesterday-ish")
        );
    }

    #[test]
    fn rejects_empty_value() {
        assert!(parse_timestamp(Dataset::Products, "  ").is_err());
    }
}
