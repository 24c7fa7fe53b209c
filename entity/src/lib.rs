//! SeaORM entity models for the tripboard schema.
//!
//! Entities are pure data definitions kept free of query logic; all database
//! access goes through the repository layer of the main crate.

pub mod prelude;

pub mod activity;
pub mod flight;
pub mod trip;
