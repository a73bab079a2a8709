use std::sync::Arc;

use crate::{
    dataset::Schema,
    repository::Trip,
    shared,
    stats::{Error, FieldUnavailable},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

/// Rider demographics across a selection. Rows without a value are left
/// out of the frequency tables, there is no "Unknown" bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    /// Descending count, ascending name among equal counts.
    pub user_types: Vec<(Arc<str>, u64)>,
    pub genders: Result<Vec<(Arc<str>, u64)>, FieldUnavailable>,
    pub birth_years: Result<BirthYearStats, FieldUnavailable>,
}

impl Demographics {
    /// The gender and birth-year sub-reports are gated on the city's
    /// schema rather than guessed from the rows, so an absent column is
    /// a typed outcome, not a failure of the run.
    pub fn from_trips(trips: &[&Trip], schema: &Schema) -> Result<Self, Error> {
        if trips.is_empty() {
            return Err(Error::EmptyInput);
        }

        let user_types =
            shared::ranked_counts(trips.iter().filter_map(|trip| trip.user_type.clone()));

        let genders = if schema.has_gender {
            Ok(shared::ranked_counts(
                trips.iter().filter_map(|trip| trip.gender.clone()),
            ))
        } else {
            Err(FieldUnavailable)
        };

        let birth_years = if schema.has_birth_year {
            birth_year_stats(trips)
        } else {
            Err(FieldUnavailable)
        };

        Ok(Self {
            user_types,
            genders,
            birth_years,
        })
    }
}

fn birth_year_stats(trips: &[&Trip]) -> Result<BirthYearStats, FieldUnavailable> {
    let years = trips.iter().filter_map(|trip| trip.birth_year);
    let earliest = years.clone().min();
    let latest = years.clone().max();
    let most_common = shared::mode(years);
    match (earliest, latest, most_common) {
        (Some(earliest), Some(latest), Some(most_common)) => Ok(BirthYearStats {
            earliest,
            latest,
            most_common,
        }),
        // The column exists but no row in the selection carries a value.
        _ => Err(FieldUnavailable),
    }
}
