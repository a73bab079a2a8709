use serde::{Deserialize, Serialize};

/// One row of a city export, exactly as published. Extra columns (the
/// nameless leading index, `Trip Duration`) are ignored; Washington's
/// file omits `Gender` and `Birth Year` entirely.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: Option<String>,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    // The exports carry birth years as floats, e.g. 1992.0
    #[serde(rename = "Birth Year")]
    pub birth_year: Option<f64>,
}
