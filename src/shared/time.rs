use chrono::{NaiveDateTime, Weekday};

/// Timestamp layout used by every city export.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The filterable months. The city exports only cover the first half of
/// the year, so the vocabulary stops at June.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-indexed calendar month number.
    pub const fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|month| month.name().to_lowercase() == needle)
    }
}

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::format::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
}

/// Full English weekday name, Monday first.
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Inverse of `Weekday::num_days_from_monday`.
pub const fn weekday_from_monday_offset(offset: u32) -> Weekday {
    match offset % 7 {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        6 => Weekday::Sun,
        _ => unreachable!(),
    }
}

#[test]
fn valid_timestamp_test() {
    let parsed = parse_timestamp("2017-06-23 15:09:32").unwrap();
    assert_eq!(parsed.to_string(), "2017-06-23 15:09:32");
}

#[test]
fn valid_timestamp_with_whitespace_test() {
    assert!(parse_timestamp(" 2017-01-02 08:00:00 ").is_ok());
}

#[test]
fn invalid_timestamp_test_1() {
    assert!(parse_timestamp("2017-06-23").is_err());
}

#[test]
fn invalid_timestamp_test_2() {
    assert!(parse_timestamp("23/06/2017 15:09:32").is_err());
}

#[test]
fn month_number_test() {
    assert_eq!(Month::January.number(), 1);
    assert_eq!(Month::June.number(), 6);
}

#[test]
fn month_from_name_test() {
    assert_eq!(Month::from_name("march"), Some(Month::March));
    assert_eq!(Month::from_name("  JUNE "), Some(Month::June));
    assert_eq!(Month::from_name("july"), None);
    assert_eq!(Month::from_name("all"), None);
}

#[test]
fn weekday_offset_roundtrip_test() {
    for offset in 0..7 {
        let weekday = weekday_from_monday_offset(offset);
        assert_eq!(weekday.num_days_from_monday(), offset);
    }
}

#[test]
fn weekday_name_test() {
    assert_eq!(weekday_name(Weekday::Mon), "Monday");
    assert_eq!(weekday_name(Weekday::Sun), "Sunday");
}
