//! Flight factory for creating test flight entities.
//!
//! This module provides factory methods for creating flight entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// Provides a builder pattern for creating flight entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db, trip.id)
///     .number("DL0042")
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    number: String,
    departure_location: String,
    arrival_location: String,
    departure_time: NaiveDate,
    arrival_time: NaiveDate,
    trip_id: i32,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - number: `"AA{id}"` where id is auto-incremented
    /// - departure_location: `"Departure {id}"`
    /// - arrival_location: `"Arrival {id}"`
    /// - departure_time: 2026-06-01
    /// - arrival_time: 2026-06-02
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `trip_id` - ID of the trip this flight belongs to
    ///
    /// # Returns
    /// - `FlightFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, trip_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            number: format!("AA{}", 1000 + id),
            departure_location: format!("Departure {}", id),
            arrival_location: format!("Arrival {}", id),
            departure_time: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            arrival_time: NaiveDate::from_ymd_opt(2026, 6, 2).unwrap(),
            trip_id,
        }
    }

    /// Sets the flight number.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the departure location.
    pub fn departure_location(mut self, departure_location: impl Into<String>) -> Self {
        self.departure_location = departure_location.into();
        self
    }

    /// Sets the arrival location.
    pub fn arrival_location(mut self, arrival_location: impl Into<String>) -> Self {
        self.arrival_location = arrival_location.into();
        self
    }

    /// Sets the departure date.
    pub fn departure_time(mut self, departure_time: NaiveDate) -> Self {
        self.departure_time = departure_time;
        self
    }

    /// Sets the arrival date.
    pub fn arrival_time(mut self, arrival_time: NaiveDate) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Builds and inserts the flight entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            id: ActiveValue::NotSet,
            number: ActiveValue::Set(self.number),
            departure_location: ActiveValue::Set(self.departure_location),
            arrival_location: ActiveValue::Set(self.arrival_location),
            departure_time: ActiveValue::Set(self.departure_time),
            arrival_time: ActiveValue::Set(self.arrival_time),
            trip_id: ActiveValue::Set(self.trip_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values for the specified trip.
///
/// Shorthand for `FlightFactory::new(db, trip_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `trip_id` - ID of the owning trip
///
/// # Returns
/// - `Ok(entity::flight::Model)` - Created flight entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_flight(
    db: &DatabaseConnection,
    trip_id: i32,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, trip_id).build().await
}
