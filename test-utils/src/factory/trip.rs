//! Trip factory for creating test trip entities.
//!
//! This module provides factory methods for creating trip entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trips with customizable fields.
///
/// Provides a builder pattern for creating trip entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::trip::TripFactory;
///
/// let trip = TripFactory::new(&db)
///     .trip_name("Paris")
///     .destination("France")
///     .build()
///     .await?;
/// ```
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    trip_name: String,
    destination: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    num_people: i32,
    user_id: i32,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - trip_name: `"Trip {id}"` where id is auto-incremented
    /// - destination: `"Destination {id}"`
    /// - start_date: 2026-06-01
    /// - end_date: 2026-06-10
    /// - num_people: 2
    /// - user_id: 1
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TripFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            trip_name: format!("Trip {}", id),
            destination: format!("Destination {}", id),
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 10).unwrap(),
            num_people: 2,
            user_id: 1,
        }
    }

    /// Sets the trip name.
    pub fn trip_name(mut self, trip_name: impl Into<String>) -> Self {
        self.trip_name = trip_name.into();
        self
    }

    /// Sets the destination.
    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Sets the start date.
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the end date.
    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the party size.
    pub fn num_people(mut self, num_people: i32) -> Self {
        self.num_people = num_people;
        self
    }

    /// Sets the owning account ID.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    /// Builds and inserts the trip entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trip::Model)` - Created trip entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        entity::trip::ActiveModel {
            id: ActiveValue::NotSet,
            trip_name: ActiveValue::Set(self.trip_name),
            destination: ActiveValue::Set(self.destination),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            num_people: ActiveValue::Set(self.num_people),
            user_id: ActiveValue::Set(self.user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trip with default values.
///
/// Shorthand for `TripFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::trip::Model)` - Created trip entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let trip = create_trip(&db).await?;
/// ```
pub async fn create_trip(db: &DatabaseConnection) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db).build().await
}
