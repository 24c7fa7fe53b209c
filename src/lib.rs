//! Tripboard persistence core.
//!
//! Repository layer for trip-planning data: trips, the flights booked for
//! them, and the activities planned around them. Each entity has a
//! repository in [`data`] that executes parameterized statements through an
//! injected SeaORM connection and maps rows back to the caller-facing shapes
//! in [`model`]. Faults never cross a repository boundary as panics or raw
//! driver errors; they are converted to [`error::DataError`] so callers can
//! branch on the failure kind.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod startup;
