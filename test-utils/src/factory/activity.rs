//! Activity factory for creating test activity entities.
//!
//! This module provides factory methods for creating activity entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test activities with customizable fields.
///
/// Provides a builder pattern for creating activity entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::activity::ActivityFactory;
///
/// let activity = ActivityFactory::new(&db, trip.id)
///     .activity_name("Louvre")
///     .rating(4.8)
///     .build()
///     .await?;
/// ```
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    activity_name: String,
    activity_address: String,
    longitude: f64,
    latitude: f64,
    rating: f64,
    picture_url: String,
    hotel_distance: f64,
    trip_id: i32,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory with default values.
    ///
    /// Defaults:
    /// - activity_name: `"Activity {id}"` where id is auto-incremented
    /// - activity_address: `"{id} Main St"`
    /// - longitude/latitude: a fixed Paris coordinate
    /// - rating: 4.5
    /// - picture_url: `"https://example.com/activity-{id}.jpg"`
    /// - hotel_distance: 1.5
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `trip_id` - ID of the trip this activity belongs to
    ///
    /// # Returns
    /// - `ActivityFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, trip_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            activity_name: format!("Activity {}", id),
            activity_address: format!("{} Main St", id),
            longitude: 2.3522,
            latitude: 48.8566,
            rating: 4.5,
            picture_url: format!("https://example.com/activity-{}.jpg", id),
            hotel_distance: 1.5,
            trip_id,
        }
    }

    /// Sets the activity name.
    pub fn activity_name(mut self, activity_name: impl Into<String>) -> Self {
        self.activity_name = activity_name.into();
        self
    }

    /// Sets the activity address.
    pub fn activity_address(mut self, activity_address: impl Into<String>) -> Self {
        self.activity_address = activity_address.into();
        self
    }

    /// Sets the longitude coordinate.
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = longitude;
        self
    }

    /// Sets the latitude coordinate.
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = latitude;
        self
    }

    /// Sets the rating.
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the picture URL.
    pub fn picture_url(mut self, picture_url: impl Into<String>) -> Self {
        self.picture_url = picture_url.into();
        self
    }

    /// Sets the distance from the hotel.
    pub fn hotel_distance(mut self, hotel_distance: f64) -> Self {
        self.hotel_distance = hotel_distance;
        self
    }

    /// Builds and inserts the activity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::activity::Model)` - Created activity entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            id: ActiveValue::NotSet,
            activity_name: ActiveValue::Set(self.activity_name),
            activity_address: ActiveValue::Set(self.activity_address),
            longitude: ActiveValue::Set(self.longitude),
            latitude: ActiveValue::Set(self.latitude),
            rating: ActiveValue::Set(self.rating),
            picture_url: ActiveValue::Set(self.picture_url),
            hotel_distance: ActiveValue::Set(self.hotel_distance),
            trip_id: ActiveValue::Set(self.trip_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity with default values for the specified trip.
///
/// Shorthand for `ActivityFactory::new(db, trip_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `trip_id` - ID of the owning trip
///
/// # Returns
/// - `Ok(entity::activity::Model)` - Created activity entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_activity(
    db: &DatabaseConnection,
    trip_id: i32,
) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db, trip_id).build().await
}
