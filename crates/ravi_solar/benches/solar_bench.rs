use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ravi_solar::{apparent_longitude_deg, mean_longitude_deg, solar_longitude_for, solar_speed};
use ravi_time::UtcTime;

fn longitude_bench(c: &mut Criterion) {
    let t = 0.24;
    let utc = UtcTime::new(2024, 3, 20, 12, 0, 0.0);

    let mut group = c.benchmark_group("solar_longitude");
    group.bench_function("mean_series", |b| b.iter(|| mean_longitude_deg(black_box(t))));
    group.bench_function("apparent", |b| b.iter(|| apparent_longitude_deg(black_box(t))));
    group.bench_function("apparent_for_utc", |b| {
        b.iter(|| solar_longitude_for(black_box(&utc)).expect("valid date"))
    });
    group.finish();
}

fn speed_bench(c: &mut Criterion) {
    let utc = UtcTime::new(2024, 1, 3, 0, 0, 0.0);

    let mut group = c.benchmark_group("solar_speed");
    group.bench_function("speed_for_utc", |b| {
        b.iter(|| solar_speed(black_box(&utc)).expect("valid date"))
    });
    group.finish();
}

criterion_group!(benches, longitude_bench, speed_bench);
criterion_main!(benches);
