use chart_axes::api::{AxisConfig, ChartSettings, build_axis};
use chart_axes::core::{
    ColumnDescriptor, ColumnType, Datum, OrdinalDomain, Orientation, TickLayout, TimeDomain,
    Value, Viewport, minimum_gap, row,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn composite_rows(count: usize) -> Vec<Datum> {
    (0..count)
        .map(|i| {
            Datum::Row(row([(
                "crossValue",
                Value::from(vec![
                    (2000 + i / 120).to_string(),
                    format!("Q{}", (i / 30) % 4 + 1),
                    format!("item-{}", i % 30),
                ]),
            )]))
        })
        .collect()
}

fn bench_ordinal_domain_10k(c: &mut Criterion) {
    let data = composite_rows(10_000);
    let domain = OrdinalDomain::default();

    c.bench_function("ordinal_domain_10k", |b| {
        b.iter(|| {
            let _ = domain.compute(black_box(&data));
        })
    });
}

fn bench_tick_layout_10k(c: &mut Criterion) {
    let keys = OrdinalDomain::default().compute(&composite_rows(10_000));

    c.bench_function("multi_level_tick_layout_10k", |b| {
        b.iter(|| {
            let _ = TickLayout::compute(
                black_box(&keys),
                Orientation::Horizontal,
                black_box(1920.0),
                true,
            );
        })
    });
}

fn bench_build_composite_axis_2k(c: &mut Criterion) {
    let settings = ChartSettings::new(Viewport::new(1600, 900)).with_cross_values(vec![
        ColumnDescriptor::new("year", ColumnType::Integer),
        ColumnDescriptor::new("quarter", ColumnType::String),
        ColumnDescriptor::new("item", ColumnType::String),
    ]);
    let config = AxisConfig::cross();
    let data = composite_rows(2_000);

    c.bench_function("build_composite_axis_2k", |b| {
        b.iter(|| {
            let _ = build_axis(&settings, &config, black_box(&data)).expect("build axis");
        })
    });
}

fn bench_time_domain_gap_10k(c: &mut Criterion) {
    let data: Vec<Datum> = (0..10_000_i64)
        .map(|i| Datum::Row(row([("crossValue", Value::from(i * 60_000 + (i % 7) * 1_000))])))
        .collect();
    let timestamps: Vec<f64> = (0..10_000).map(|i| f64::from(i) * 60_000.0).collect();
    let domain = TimeDomain::default();

    c.bench_function("time_domain_10k", |b| {
        b.iter(|| {
            let _ = domain.compute(black_box(&data));
        })
    });
    c.bench_function("minimum_gap_10k", |b| {
        b.iter(|| {
            let _ = minimum_gap(black_box(&timestamps));
        })
    });
}

criterion_group!(
    benches,
    bench_ordinal_domain_10k,
    bench_tick_layout_10k,
    bench_build_composite_axis_2k,
    bench_time_domain_gap_10k
);
criterion_main!(benches);
