use std::path::PathBuf;

use velostat::prelude::*;

fn load_chicago() -> Repository {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    let dataset = Dataset::new(Config::default()).from_dir(data_dir);
    Repository::load(&dataset, City::Chicago).unwrap()
}

#[test]
fn all_all_is_identity_test() {
    let repository = load_chicago();
    let selection = repository.select(&FilterCriteria::default());

    assert_eq!(selection.len(), repository.len());
    for (selected, stored) in selection.iter().zip(repository.trips()) {
        assert_eq!(selected.index, stored.index);
    }
}

#[test]
fn month_filter_test() {
    let repository = load_chicago();
    let criteria = FilterCriteria::new(Some(Month::June), None);
    let selection = repository.select(&criteria);

    assert_eq!(selection.len(), 2);
    for trip in selection {
        assert_eq!(trip.month(), 6);
    }
}

#[test]
fn weekday_filter_test() {
    let repository = load_chicago();
    let criteria = FilterCriteria::new(None, Some(Weekday::Mon));
    let selection = repository.select(&criteria);

    assert_eq!(selection.len(), 4);
    for trip in selection {
        assert_eq!(trip.weekday(), Weekday::Mon);
    }
}

#[test]
fn filters_compose_with_and_test() {
    let repository = load_chicago();
    let criteria = FilterCriteria::new(Some(Month::June), Some(Weekday::Mon));
    let selection = repository.select(&criteria);

    assert_eq!(selection.len(), 1);
    assert_eq!(selection[0].month(), 6);
    assert_eq!(selection[0].weekday(), Weekday::Mon);
}

#[test]
fn empty_selection_is_valid_test() {
    let repository = load_chicago();
    let criteria = FilterCriteria::new(Some(Month::February), Some(Weekday::Sun));
    let selection = repository.select(&criteria);

    assert!(selection.is_empty());
}

#[test]
fn filtering_is_idempotent_test() {
    let repository = load_chicago();
    let criteria = FilterCriteria::new(Some(Month::June), Some(Weekday::Mon));

    let once = repository.select(&criteria);
    let twice: Vec<_> = once
        .iter()
        .copied()
        .filter(|trip| criteria.matches(trip))
        .collect();

    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(&twice) {
        assert_eq!(a.index, b.index);
    }
}

#[test]
fn selection_is_non_destructive_test() {
    let repository = load_chicago();

    let narrowed = repository.select(&FilterCriteria::new(Some(Month::January), None));
    assert_eq!(narrowed.len(), 2);

    // The full collection is still there for the next loop iteration
    let full = repository.select(&FilterCriteria::default());
    assert_eq!(full.len(), repository.len());
}
