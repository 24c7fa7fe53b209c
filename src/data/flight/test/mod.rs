mod get_by_id;

use super::*;
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

/// Builds a scope token from a factory-created trip entity.
fn scope(trip: entity::trip::Model) -> Trip {
    Trip::from_entity(trip)
}
