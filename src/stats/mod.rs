use thiserror::Error;

mod duration;
mod stations;
mod travel;
mod users;
pub use duration::*;
pub use stations::*;
pub use travel::*;
pub use users::*;

/// Statistical failures local to one report. These are rendered inline
/// and never abort the remaining reports.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("No trips match the current selection")]
    EmptyInput,
    #[error("Average duration is undefined for an empty selection")]
    DivisionUndefined,
}

/// A demographic column this city's file does not carry, or carries
/// without a single value in the selection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No such information for this city")]
pub struct FieldUnavailable;
