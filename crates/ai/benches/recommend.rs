use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{DateTime, Duration, TimeZone, Utc};
use stockshift_ai::{Horizon, assess_stockout_risk, recommend};
use stockshift_core::TransactionId;
use stockshift_inventory::{Direction, InventoryItem, Transaction};

const CATEGORIES: [&str; 4] = ["Electronics", "Packaging", "Office Supplies", "Raw Materials"];

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 15, 12, 0, 0).unwrap()
}

/// `item_count` items with one movement per item per day over 90 days.
fn fixture(item_count: usize) -> (Vec<InventoryItem>, Vec<Transaction>) {
    let items: Vec<InventoryItem> = (0..item_count)
        .map(|i| {
            InventoryItem::new(
                format!("SKU-{i:05}").parse().unwrap(),
                format!("Item {i}"),
                CATEGORIES[i % CATEGORIES.len()],
                (i as u64 * 7) % 300,
                1.0 + (i % 50) as f64,
                20 + (i as u64 % 40),
            )
        })
        .collect();

    let mut transactions = Vec::with_capacity(item_count * 90);
    for (i, item) in items.iter().enumerate() {
        for day in 0..90 {
            let direction = if day % 10 == 0 { Direction::In } else { Direction::Out };
            transactions.push(Transaction::new(
                TransactionId::new(format!("tx-{i}-{day}")).unwrap(),
                item.id.clone(),
                direction,
                1 + (day as u64 % 5),
                now() - Duration::days(day),
            ));
        }
    }

    (items, transactions)
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for item_count in [10usize, 100, 1_000] {
        let (items, transactions) = fixture(item_count);
        group.throughput(Throughput::Elements(transactions.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(item_count),
            &(items, transactions),
            |b, (items, transactions)| {
                b.iter(|| recommend(black_box(items), black_box(transactions), Horizon::Days90, now()))
            },
        );
    }

    group.finish();
}

fn bench_stockout_risk(c: &mut Criterion) {
    let (items, transactions) = fixture(1_000);
    c.bench_function("assess_stockout_risk_1000", |b| {
        b.iter(|| assess_stockout_risk(black_box(&items), black_box(&transactions), now()))
    });
}

criterion_group!(benches, bench_recommend, bench_stockout_risk);
criterion_main!(benches);
