mod models;
mod source;
pub use models::*;

use chrono::Weekday;

use crate::{
    dataset::{City, Schema},
    shared::time::Month,
};

/// The month/weekday selection narrowing the working record set.
/// `None` on either axis means "all". Callers hand over pre-validated
/// values, the engine never sees raw prompt text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub month: Option<Month>,
    pub weekday: Option<Weekday>,
}

impl FilterCriteria {
    pub fn new(month: Option<Month>, weekday: Option<Weekday>) -> Self {
        Self { month, weekday }
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        let month_ok = self
            .month
            .is_none_or(|month| trip.month() == month.number());
        let weekday_ok = self.weekday.is_none_or(|weekday| trip.weekday() == weekday);
        month_ok && weekday_ok
    }
}

/// The loaded trip records for one city. The repository owns the
/// collection for the session, selections borrow from it.
#[derive(Debug, Clone)]
pub struct Repository {
    city: City,
    schema: Schema,
    trips: Box<[Trip]>,
}

impl Repository {
    pub fn city(&self) -> City {
        self.city
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Narrows the collection to the trips matching the criteria, in
    /// stored order. Non-destructive: the full collection stays
    /// available for the next selection. An empty result is valid.
    pub fn select(&self, criteria: &FilterCriteria) -> Vec<&Trip> {
        self.trips
            .iter()
            .filter(|trip| criteria.matches(trip))
            .collect()
    }
}
