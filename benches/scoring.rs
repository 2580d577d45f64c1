//! Scoring benchmark: feature vector → logistic model → decision and risk level.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fraud_scorer::config::ScoringConfig;
use fraud_scorer::features::{transform, TransactionRecord};
use fraud_scorer::model::LogisticModel;
use fraud_scorer::risk::Scorer;

fn bench_scoring(c: &mut Criterion) {
    let model = LogisticModel::new(
        [0.8, 1.2, 0.6, 0.4, -0.3, 0.9, -0.5, 0.2, 0.7, 0.3, -0.1, 0.1, 0.2, 0.4],
        -4.0,
    );
    let scorer = Scorer::new(ScoringConfig { threshold: 0.35 });
    let record = TransactionRecord {
        amount: 1200.0,
        customer_age: 63.0,
        hour: 2,
        transaction_type: "transfer".to_string(),
        merchant_category: "unknown".to_string(),
        card_type: "debit".to_string(),
        country: "kenya".to_string(),
        device: "web".to_string(),
    };
    let vector = transform(&record);

    c.bench_function("score_logistic", |b| {
        b.iter(|| scorer.score(black_box(&vector), &model))
    });
    c.bench_function("transform_and_score", |b| {
        b.iter(|| scorer.score(&transform(black_box(&record)), &model))
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
