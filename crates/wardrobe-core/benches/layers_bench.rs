//! Criterion benchmarks for [`OutfitLayerSet`] navigation and catalog loading.
//!
//! Run with:
//! ```bash
//! cargo bench --package wardrobe-core --bench layers_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wardrobe_core::{ClothingCategory, ClothingItem, OutfitLayerSet, RngSource};

/// A closet with `per_category` items in every category.
fn closet(per_category: usize) -> Vec<ClothingItem> {
    ClothingCategory::ALL
        .iter()
        .flat_map(|&c| (0..per_category).map(move |i| ClothingItem::new(c, format!("{c}-{i}"))))
        .collect()
}

fn bench_load_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_catalog");

    for &per_category in &[10usize, 100, 1000] {
        let items = closet(per_category);
        group.bench_with_input(
            BenchmarkId::new("items_per_category", per_category),
            &items,
            |b, items| {
                b.iter(|| {
                    let mut set = OutfitLayerSet::new();
                    set.load_catalog(black_box(items.clone()));
                    set
                })
            },
        );
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut set = OutfitLayerSet::new();
    set.load_catalog(closet(50));
    let mut rng = RngSource::seeded(7);
    let mut group = c.benchmark_group("navigation");

    group.bench_function("randomize_all", |b| {
        b.iter(|| set.randomize_all(black_box(&mut rng)))
    });

    group.bench_function("next_top", |b| b.iter(|| set.next(black_box(1))));

    group.finish();
}

criterion_group!(benches, bench_load_catalog, bench_navigation);
criterion_main!(benches);
