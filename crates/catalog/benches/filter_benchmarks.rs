use chrono::Utc;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use maison_catalog::{
    filter, Category, FilterCriteria, Product, ProductDraft, RangeBounds, Selection, FRAGRANCES,
};

fn seed_catalog(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| {
            ProductDraft::new()
                .name(format!("product-{i}"))
                .category(Category::Fragrance)
                .description("bench product")
                .price_cents((i as u64 % 200) * 100)
                .volume_ml((i as u32 % 10) * 25)
                .fragrance(FRAGRANCES[i % FRAGRANCES.len()])
                .commit(Utc::now())
                .expect("valid bench product")
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let catalog = seed_catalog(1_000);

    let narrow = FilterCriteria {
        price: RangeBounds::new(2_000, 6_000),
        volume: RangeBounds::new(25, 100),
        fragrance: Selection::Only(FRAGRANCES[0].to_string()),
        category: Selection::All,
    };

    c.bench_function("filter_match_all_1k", |b| {
        b.iter_batched(
            || catalog.clone(),
            |products| filter(&products, &FilterCriteria::match_all()),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("filter_narrow_1k", |b| {
        b.iter_batched(
            || catalog.clone(),
            |products| filter(&products, &narrow),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
