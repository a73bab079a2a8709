use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::{
    dataset::{self, RawTrip},
    shared::time,
};

/// One bike-share rental. Station names are interned by the repository,
/// so cloning a trip is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub index: u32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: Arc<str>,
    pub end_station: Arc<str>,
    pub user_type: Option<Arc<str>>,
    pub gender: Option<Arc<str>>,
    pub birth_year: Option<i32>,
}

/// The time fields below are views derived from the stored timestamps on
/// every call, they can never disagree with `start_time`/`end_time`.
impl Trip {
    /// 1-indexed calendar month of the start time.
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Hour of day the trip started, 0-23.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Whole seconds between start and end, truncated toward zero.
    /// `end_time >= start_time` is assumed from the source data, not
    /// validated here.
    pub fn duration_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}

impl TryFrom<RawTrip> for Trip {
    type Error = dataset::Error;

    fn try_from(value: RawTrip) -> Result<Self, Self::Error> {
        let start_time = parse(&value.start_time)?;
        let end_time = parse(&value.end_time)?;
        Ok(Self {
            index: 0,
            start_time,
            end_time,
            start_station: value.start_station.into(),
            end_station: value.end_station.into(),
            user_type: value.user_type.map(|val| val.into()),
            gender: value.gender.map(|val| val.into()),
            birth_year: value.birth_year.map(|year| year as i32),
        })
    }
}

fn parse(value: &str) -> Result<NaiveDateTime, dataset::Error> {
    time::parse_timestamp(value).map_err(|source| dataset::Error::Timestamp {
        value: value.to_string(),
        source,
    })
}
