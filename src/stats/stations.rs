use std::sync::Arc;

use crate::{repository::Trip, shared, stats::Error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCount {
    pub name: Arc<str>,
    pub trips: u64,
}

/// A (start, end) station pair with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCount {
    pub start: Arc<str>,
    pub end: Arc<str>,
    pub trips: u64,
}

/// The most used stations and station pair across a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationPopularity {
    pub popular_start: StationCount,
    pub popular_end: StationCount,
    pub popular_route: RouteCount,
}

impl StationPopularity {
    /// Ties resolve to the lexicographically smallest name, pairwise for
    /// routes.
    pub fn from_trips(trips: &[&Trip]) -> Result<Self, Error> {
        let (start, start_trips) =
            shared::mode_with_count(trips.iter().map(|trip| trip.start_station.clone()))
                .ok_or(Error::EmptyInput)?;
        let (end, end_trips) =
            shared::mode_with_count(trips.iter().map(|trip| trip.end_station.clone()))
                .ok_or(Error::EmptyInput)?;
        let ((route_start, route_end), route_trips) = shared::mode_with_count(
            trips
                .iter()
                .map(|trip| (trip.start_station.clone(), trip.end_station.clone())),
        )
        .ok_or(Error::EmptyInput)?;

        Ok(Self {
            popular_start: StationCount {
                name: start,
                trips: start_trips,
            },
            popular_end: StationCount {
                name: end,
                trips: end_trips,
            },
            popular_route: RouteCount {
                start: route_start,
                end: route_end,
                trips: route_trips,
            },
        })
    }
}
