use criterion::{Criterion, criterion_group, criterion_main};
use hme_prob::{Variant, density, gradient};
use std::hint::black_box;

fn bench_continuous_emissions(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.001 + 0.0005).collect();

    let cases: [(Variant, &[f64]); 4] = [
        (Variant::Normal, &[2.0, 1.3]),
        (Variant::Gamma, &[2.5, 1.3]),
        (Variant::StudentT, &[2.0, 1.3, 7.0]),
        (Variant::TruncatedNormal, &[2.0, 1.3, 0.0, 8.0]),
    ];
    for (variant, params) in cases {
        c.bench_function(&format!("{variant}_density_10k"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &xs {
                    acc += density(variant, x, params);
                }
                black_box(acc)
            })
        });

        c.bench_function(&format!("{variant}_gradient_10k"), |b| {
            let mut out = vec![0.0; params.len()];
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &xs {
                    gradient(variant, x, params, &mut out);
                    acc += out[0];
                }
                black_box(acc)
            })
        });
    }
}

fn bench_count_emissions(c: &mut Criterion) {
    let ks: Vec<f64> = (0..10_000).map(|i| (i % 30) as f64).collect();

    let cases: [(Variant, &[f64]); 4] = [
        (Variant::Poisson, &[3.2]),
        (Variant::NegativeBinomial, &[2.5, 0.4]),
        (Variant::BetaBinomial, &[30.0, 0.3, 0.2]),
        (Variant::ZeroInflatedNegativeBinomial, &[2.5, 0.4, 0.2]),
    ];
    for (variant, params) in cases {
        c.bench_function(&format!("{variant}_gradient_10k"), |b| {
            let mut out = vec![0.0; params.len()];
            b.iter(|| {
                let mut acc = 0.0;
                for &k in &ks {
                    gradient(variant, k, params, &mut out);
                    acc += out[1];
                }
                black_box(acc)
            })
        });
    }
}

criterion_group!(benches, bench_continuous_emissions, bench_count_emissions);
criterion_main!(benches);
