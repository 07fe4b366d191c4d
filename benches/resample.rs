use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soflo::{monthly_means, DailyObservation};

fn fifty_years_of_days() -> Vec<DailyObservation> {
    let start = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    (0..(50 * 365))
        .map(|offset| {
            let date = start + Duration::days(offset);
            DailyObservation {
                date,
                temperature_max: 83.0 + f64::from(offset % 30) * 0.1,
                temperature_min: 63.0,
                temperature_mean: 73.0,
            }
        })
        .collect()
}

fn bench_resample(c: &mut Criterion) {
    let days = fifty_years_of_days();
    c.bench_function("monthly_means_50y", |b| {
        b.iter(|| monthly_means(black_box(&days)))
    });
}

criterion_group!(benches, bench_resample);
criterion_main!(benches);
