pub use crate::dataset::{City, Config, Dataset, Schema};
pub use crate::repository::{FilterCriteria, Repository, Trip};
pub use crate::shared::time::Month;
pub use crate::stats::{
    BirthYearStats, Demographics, FieldUnavailable, RouteCount, StationCount, StationPopularity,
    TravelTimes, TripDurations,
};
pub use chrono::Weekday;
