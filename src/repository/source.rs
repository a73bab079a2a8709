use std::{collections::HashSet, sync::Arc, time::Instant};

use tracing::debug;

use crate::{
    dataset::{self, City, Dataset},
    repository::{Repository, Trip},
};

impl Repository {
    /// Loads a city's records into memory. Every row must convert; a bad
    /// row or timestamp fails the whole load so the derived time fields
    /// stay total downstream.
    pub fn load(dataset: &Dataset, city: City) -> Result<Self, dataset::Error> {
        debug!("Loading {} trips...", city.name());
        let now = Instant::now();
        let (schema, rows) = dataset.read_trips(city)?;

        let mut stations: HashSet<Arc<str>> = HashSet::new();
        let mut trips: Vec<Trip> = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let mut trip = Trip::try_from(row)?;
            trip.index = i as u32;
            trip.start_station = intern(&mut stations, trip.start_station);
            trip.end_station = intern(&mut stations, trip.end_station);
            trips.push(trip);
        }

        debug!("Loading {} trips took {:?}", trips.len(), now.elapsed());
        Ok(Self {
            city,
            schema,
            trips: trips.into(),
        })
    }
}

fn intern(stations: &mut HashSet<Arc<str>>, name: Arc<str>) -> Arc<str> {
    if let Some(existing) = stations.get(&name) {
        existing.clone()
    } else {
        stations.insert(name.clone());
        name
    }
}
