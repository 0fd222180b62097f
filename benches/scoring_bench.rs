use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use uoindex::index::engine::score_all;
use uoindex::index::RegionRecord;
use uoindex::weights::{WeightPreset, WeightVector};

fn synthetic_counties(n: usize) -> Vec<RegionRecord> {
    (0..n)
        .map(|i| {
            let base = i as f64;
            let mut values = [None; 9];
            for (slot, v) in values.iter_mut().enumerate() {
                *v = Some(base * 13.7 + slot as f64 * 101.3 + (i % 7) as f64);
            }
            RegionRecord {
                name: format!("county-{}", i),
                fips: format!("06{:03}", i * 2 + 1),
                values,
            }
        })
        .collect()
}

fn bench_score_all(c: &mut Criterion) {
    let weights = WeightVector::from_preset(WeightPreset::EquityFocused);

    // 58 = one state's worth of counties, 3143 = national scale
    for n in [58usize, 3143] {
        let records = synthetic_counties(n);
        c.bench_function(&format!("score_all_{}", n), |b| {
            b.iter(|| score_all(black_box(&records), black_box(&weights)))
        });
    }
}

criterion_group!(benches, bench_score_all);
criterion_main!(benches);
