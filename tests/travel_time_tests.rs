use velostat::dataset::RawTrip;
use velostat::prelude::*;
use velostat::stats;

fn trip(start_time: &str) -> Trip {
    Trip::try_from(RawTrip {
        start_time: start_time.into(),
        end_time: start_time.into(),
        start_station: "A".into(),
        end_station: "B".into(),
        user_type: Some("Subscriber".into()),
        gender: None,
        birth_year: None,
    })
    .unwrap()
}

#[test]
fn popular_hour_test() {
    let trips = vec![
        trip("2017-01-02 08:00:00"),
        trip("2017-01-09 08:30:00"),
        trip("2017-01-10 09:00:00"),
        trip("2017-01-11 14:00:00"),
    ];
    let selection: Vec<&Trip> = trips.iter().collect();
    let summary = TravelTimes::from_trips(&selection).unwrap();

    assert_eq!(summary.popular_hour, 8);
    assert_eq!(summary.popular_month, 1);
    assert_eq!(summary.popular_weekday, Weekday::Mon);
}

#[test]
fn month_tie_takes_smallest_test() {
    let trips = vec![
        trip("2017-02-01 10:00:00"),
        trip("2017-01-05 10:00:00"),
        trip("2017-02-10 10:00:00"),
        trip("2017-01-20 10:00:00"),
    ];
    let selection: Vec<&Trip> = trips.iter().collect();
    let summary = TravelTimes::from_trips(&selection).unwrap();

    assert_eq!(summary.popular_month, 1);
}

#[test]
fn weekday_tie_is_monday_first_test() {
    // One Sunday and one Monday trip. Monday comes first in the ISO
    // week, so it wins the tie.
    let trips = vec![trip("2017-01-01 10:00:00"), trip("2017-01-02 10:00:00")];
    let selection: Vec<&Trip> = trips.iter().collect();
    let summary = TravelTimes::from_trips(&selection).unwrap();

    assert_eq!(summary.popular_weekday, Weekday::Mon);
}

#[test]
fn empty_selection_test() {
    let selection: Vec<&Trip> = Vec::new();
    assert_eq!(
        TravelTimes::from_trips(&selection),
        Err(stats::Error::EmptyInput)
    );
}
