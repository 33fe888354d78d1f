//! Trip statistics reports.
//!
//! Four independent report generators over a (possibly filtered) dataset:
//! travel times, station popularity, trip duration, and user demographics.
//! Each is a pure function of its input and fails with
//! [`EmptyDataset`](crate::error::EmptyDataset) when the dataset has zero
//! records; one report's failure never affects the others.

pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;
