//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a flight together with the trip that owns it.
///
/// Convenience method for tests that need a flight but don't care about
/// the owning trip's fields. Both entities are created with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((trip, flight))` - Tuple of the created trip and flight
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_trip(
    db: &DatabaseConnection,
) -> Result<(entity::trip::Model, entity::flight::Model), DbErr> {
    let trip = crate::factory::trip::create_trip(db).await?;
    let flight = crate::factory::flight::create_flight(db, trip.id).await?;

    Ok((trip, flight))
}

/// Creates an activity together with the trip that owns it.
///
/// Convenience method for tests that need an activity but don't care about
/// the owning trip's fields. Both entities are created with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((trip, activity))` - Tuple of the created trip and activity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_activity_with_trip(
    db: &DatabaseConnection,
) -> Result<(entity::trip::Model, entity::activity::Model), DbErr> {
    let trip = crate::factory::trip::create_trip(db).await?;
    let activity = crate::factory::activity::create_activity(db, trip.id).await?;

    Ok((trip, activity))
}
