//! An analytics engine for US bike-share trip records.
//! Loads a city's trips from a delimited export, narrows them by month
//! and weekday, and summarizes travel times, stations, durations and
//! rider demographics.

pub mod dataset;
pub mod prelude;
pub mod repository;
pub mod shared;
pub mod stats;
