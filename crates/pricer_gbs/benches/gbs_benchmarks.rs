//! Criterion benchmarks for the pricing kernel.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricer_gbs::analytical::{GbsInputs, OptionType};

fn bench_gbs_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("gbs_pricing");

    let call = GbsInputs::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.0, 0.15).unwrap();
    group.bench_function("call_value_and_greeks", |bencher| {
        bencher.iter(|| black_box(&call).price().unwrap())
    });

    let put = GbsInputs::new(OptionType::Put, 100.0, 100.0, 1.0, 0.05, 0.0, 0.15).unwrap();
    group.bench_function("put_value_and_greeks", |bencher| {
        bencher.iter(|| black_box(&put).price().unwrap())
    });

    group.bench_function("validate_and_price", |bencher| {
        bencher.iter(|| {
            let inputs = GbsInputs::new(
                black_box(OptionType::Call),
                black_box(100.0),
                black_box(100.0),
                black_box(1.0),
                black_box(0.05),
                black_box(0.0),
                black_box(0.15),
            )
            .unwrap();
            inputs.price().unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_gbs_pricing);
criterion_main!(benches);
