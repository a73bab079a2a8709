use crate::{repository::Trip, stats::Error};

/// Total and average trip length across a selection, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripDurations {
    pub total_seconds: i64,
    pub average_seconds: f64,
    pub trips: u64,
}

impl TripDurations {
    pub fn from_trips(trips: &[&Trip]) -> Result<Self, Error> {
        if trips.is_empty() {
            return Err(Error::DivisionUndefined);
        }
        let total_seconds: i64 = trips.iter().map(|trip| trip.duration_seconds()).sum();
        Ok(Self {
            total_seconds,
            average_seconds: total_seconds as f64 / trips.len() as f64,
            trips: trips.len() as u64,
        })
    }
}
