use asce_clearsky::{
    ClearSkyModel, GeoPosition, radiation, solar_geometry_with_time_dependent_parts,
    time::TimeInstant, time_dependent_parts,
};
use chrono::{DateTime, Duration, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_single_calculation(c: &mut Criterion) {
    let datetime = "2019-06-21T11:25:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 45.46;
    let lon = 9.19;

    c.bench_function("simplified_single", |b| {
        b.iter(|| {
            radiation::estimate_clear_sky_radiation(
                black_box(datetime),
                black_box(lat),
                black_box(lon),
                black_box(120.0),
                black_box(None),
            )
            .unwrap()
        })
    });

    c.bench_function("detailed_single", |b| {
        b.iter(|| {
            radiation::estimate_clear_sky_radiation(
                black_box(datetime),
                black_box(lat),
                black_box(lon),
                black_box(120.0),
                black_box(Some(0.9)),
            )
            .unwrap()
        })
    });
}

fn benchmark_time_series_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");

    let start = "2019-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let station = GeoPosition::new(45.46, 9.19, 120.0).unwrap();
    let model = ClearSkyModel::with_turbidity(0.9).unwrap();

    // One year of 10-minute logger intervals
    for &count in &[1_000_u64, 52_560] {
        group.throughput(Throughput::Elements(count));

        group.bench_with_input(BenchmarkId::new("series", count), &count, |b, &count| {
            b.iter(|| {
                radiation::clear_sky_series(
                    black_box(start),
                    600,
                    count as usize,
                    station,
                    model,
                )
                .unwrap()
                .map(|(_, estimate)| estimate.value())
                .sum::<f64>()
            })
        });

        let datetimes: Vec<DateTime<Utc>> = (0..count)
            .map(|i| start + Duration::minutes(10 * i as i64))
            .collect();
        group.bench_with_input(BenchmarkId::new("instantaneous", count), &count, |b, _| {
            b.iter(|| {
                for &dt in &datetimes {
                    black_box(
                        radiation::estimate_clear_sky_radiation_with_model(
                            dt, 45.46, 9.19, 120.0, &model,
                        )
                        .unwrap(),
                    );
                }
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_sweep_fixed_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep_fixed_time");

    let instant = TimeInstant::from_utc(2019, 6, 21, 12, 0, 0.0).unwrap();
    let coordinates: Vec<(f64, f64)> = (0..100)
        .flat_map(|i| {
            (0..100).map(move |j| (-89.0 + f64::from(i) * 1.78, -179.0 + f64::from(j) * 3.58))
        })
        .collect();
    group.throughput(Throughput::Elements(coordinates.len() as u64));

    group.bench_function("direct", |b| {
        b.iter(|| {
            for &(lat, lon) in &coordinates {
                let station = GeoPosition::new(lat, lon, 0.0).unwrap();
                black_box(
                    radiation::estimate_from_instant(&instant, &station, &ClearSkyModel::Simplified)
                        .unwrap(),
                );
            }
        })
    });

    group.bench_function("time_dependent_parts", |b| {
        b.iter(|| {
            let parts = time_dependent_parts(&instant);
            for &(lat, lon) in &coordinates {
                let geometry = solar_geometry_with_time_dependent_parts(lat, lon, &parts).unwrap();
                black_box(
                    radiation::clear_sky_radiation(&geometry, 0.0, &ClearSkyModel::Simplified)
                        .unwrap(),
                );
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series_fixed_location,
    benchmark_coordinate_sweep_fixed_time
);
criterion_main!(benches);
