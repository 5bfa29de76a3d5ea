use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::sync::Arc;

use chrono::NaiveDate;

use abcrank_classify::AbcClassifier;
use abcrank_core::{AccountId, FixedClock, OrderRecord, ProductRecord};

/// Synthetic catalog: `n` offers spread over `n / 4` SKUs, three orders per
/// offer with a mix of delivered/cancelled lines and listing ages.
fn synthetic_tables(n: usize) -> (Vec<ProductRecord>, Vec<OrderRecord>) {
    let mut products = Vec::with_capacity(n);
    let mut orders = Vec::with_capacity(n * 3);
    for i in 0..n {
        let sku = i / 4;
        products.push(ProductRecord {
            offer_id: format!("OF-{i}").into(),
            canonical_sku: format!("SKU-{sku}").into(),
            account_id: AccountId::new((i % 7) as i64),
            created_at: if i % 3 == 0 {
                "2024-04-01".to_string()
            } else {
                "2025-06-15".to_string()
            },
            family: format!("Family-{}", sku % 11),
            title: format!("Product {sku}"),
            reviews_count: (i % 5) as i64,
            rating_value: (i % 5) as f64,
        });
        for line in 0..3 {
            orders.push(OrderRecord {
                offer_id: format!("OF-{i}").into(),
                account_id: AccountId::new((i % 7) as i64),
                created_at: if line == 0 {
                    "2024-11-20".to_string()
                } else {
                    "2025-03-05".to_string()
                },
                status: if (i + line) % 2 == 0 {
                    "Доставлен".to_string()
                } else {
                    "Отменен".to_string()
                },
                revenue: ((i * 13 + line * 7) % 500) as f64,
            });
        }
    }
    (products, orders)
}

fn bench_classify(c: &mut Criterion) {
    let classifier = AbcClassifier::new(Arc::new(FixedClock(
        NaiveDate::from_ymd_opt(2025, 8, 30).expect("valid date"),
    )));

    let mut group = c.benchmark_group("classify");
    for &size in &[100usize, 1_000, 10_000] {
        let (products, orders) = synthetic_tables(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                classifier
                    .classify(black_box(&products), black_box(&orders), None)
                    .expect("classification succeeds")
            });
        });
    }
    group.finish();
}

fn bench_detect_stale(c: &mut Criterion) {
    let classifier = AbcClassifier::new(Arc::new(FixedClock(
        NaiveDate::from_ymd_opt(2025, 8, 30).expect("valid date"),
    )));
    let (products, orders) = synthetic_tables(10_000);

    c.bench_function("detect_stale_10k", |b| {
        b.iter(|| {
            classifier
                .detect_stale(black_box(&products), black_box(&orders))
                .expect("detection succeeds")
        });
    });
}

criterion_group!(benches, bench_classify, bench_detect_stale);
criterion_main!(benches);
