mod create;
mod delete;
mod get_all_by_trip;
mod update;

use super::*;
use test_utils::{builder::TestBuilder, factory};

/// Builds a scope token from a factory-created trip entity.
fn scope(trip: entity::trip::Model) -> Trip {
    Trip::from_entity(trip)
}

/// Input fields for the Louvre activity used across scenarios.
fn louvre() -> ActivityParam {
    ActivityParam {
        activity_name: "Louvre".to_string(),
        activity_address: "Rue de Rivoli".to_string(),
        longitude: 2.3376,
        latitude: 48.8606,
        rating: 4.8,
        picture_url: "https://example.com/louvre.jpg".to_string(),
        hotel_distance: 1.2,
    }
}
