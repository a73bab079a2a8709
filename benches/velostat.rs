use criterion::{Criterion, criterion_group, criterion_main};
use std::{env, hint::black_box, path::Path};
use velostat::prelude::*;

fn select_all(repository: &Repository) {
    let _ = black_box(repository.select(&FilterCriteria::default()));
}

fn full_report(repository: &Repository) {
    let criteria = FilterCriteria::new(Some(Month::June), None);
    let selection = repository.select(&criteria);
    let _ = black_box(TravelTimes::from_trips(&selection));
    let _ = black_box(StationPopularity::from_trips(&selection));
    let _ = black_box(TripDurations::from_trips(&selection));
    let _ = black_box(Demographics::from_trips(&selection, repository.schema()));
}

fn criterion_benchmark(c: &mut Criterion) {
    let data_path = match env::var("VELOSTAT_DATA_PATH") {
        Ok(path_str) => Path::new(&path_str).to_owned(),
        Err(err) => {
            println!("Missing VELOSTAT_DATA_PATH environment variable: {err}");
            return;
        }
    };

    let dataset = Dataset::new(Config::default()).from_dir(data_path);
    let repository = Repository::load(&dataset, City::Chicago).expect("Failed to load trips");

    let mut group = c.benchmark_group("Stats");

    group.bench_function("Select all", |b| b.iter(|| select_all(&repository)));

    group.bench_function("Full report", |b| b.iter(|| full_report(&repository)));

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
