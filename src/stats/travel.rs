use chrono::Weekday;

use crate::{
    repository::Trip,
    shared::{self, time},
    stats::Error,
};

/// The most frequent travel times across a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelTimes {
    /// 1-indexed calendar month.
    pub popular_month: u32,
    pub popular_weekday: Weekday,
    /// Hour of day, 0-23.
    pub popular_hour: u32,
}

impl TravelTimes {
    /// Mode of each derived time field. Ties resolve to the earliest
    /// value in natural order: January before June, Monday before
    /// Sunday, 08 before 14.
    pub fn from_trips(trips: &[&Trip]) -> Result<Self, Error> {
        let popular_month =
            shared::mode(trips.iter().map(|trip| trip.month())).ok_or(Error::EmptyInput)?;
        let weekday_offset =
            shared::mode(trips.iter().map(|trip| trip.weekday().num_days_from_monday()))
                .ok_or(Error::EmptyInput)?;
        let popular_hour =
            shared::mode(trips.iter().map(|trip| trip.hour())).ok_or(Error::EmptyInput)?;
        Ok(Self {
            popular_month,
            popular_weekday: time::weekday_from_monday_offset(weekday_offset),
            popular_hour,
        })
    }
}
