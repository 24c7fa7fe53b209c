//! Activity data repository for database operations.
//!
//! This module provides the `ActivityRepository` for managing activity records
//! in the database. Every operation except create takes the owning trip as a
//! scope: reads, updates, and deletes match both the activity's identity and
//! the trip's identity, so an activity ID that exists under a different trip
//! is invisible.

#[cfg(test)]
mod test;

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::error::DataError;
use crate::model::activity::{Activity, ActivityParam};
use crate::model::trip::Trip;

/// Repository providing database operations for activities.
pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    /// Creates a new ActivityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ActivityRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new activity under the given trip.
    ///
    /// Binds every input field plus the trip reference derived from the
    /// scope. The trip reference is assigned here once and is not rewritten
    /// by updates.
    ///
    /// # Arguments
    /// - `trip` - The trip the activity belongs to
    /// - `param` - Input fields for the new activity
    ///
    /// # Returns
    /// - `Ok(Activity)` - The created activity with generated ID
    /// - `Err(DataError)` - Classified database error during insert
    pub async fn create(&self, trip: &Trip, param: ActivityParam) -> Result<Activity, DataError> {
        let entity = entity::activity::ActiveModel {
            activity_name: ActiveValue::Set(param.activity_name),
            activity_address: ActiveValue::Set(param.activity_address),
            longitude: ActiveValue::Set(param.longitude),
            latitude: ActiveValue::Set(param.latitude),
            rating: ActiveValue::Set(param.rating),
            picture_url: ActiveValue::Set(param.picture_url),
            hotel_distance: ActiveValue::Set(param.hotel_distance),
            trip_id: ActiveValue::Set(trip.id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(entity))
    }

    /// Gets all activities for a trip, ordered alphabetically by name.
    ///
    /// Returns an empty vector, not an error, when the trip has no
    /// activities.
    ///
    /// # Arguments
    /// - `trip` - The trip whose activities to list
    ///
    /// # Returns
    /// - `Ok(Vec<Activity>)` - The trip's activities sorted ascending by name
    /// - `Err(DataError)` - Classified database error during query
    pub async fn get_all_by_trip(&self, trip: &Trip) -> Result<Vec<Activity>, DataError> {
        let entities = entity::prelude::Activity::find()
            .filter(entity::activity::Column::TripId.eq(trip.id))
            .order_by_asc(entity::activity::Column::ActivityName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Activity::from_entity).collect())
    }

    /// Gets an activity by ID within the given trip.
    ///
    /// `Ok(None)` is returned both when the ID does not exist and when it
    /// belongs to another trip; callers cannot tell the two apart.
    ///
    /// # Arguments
    /// - `id` - ID of the activity to fetch
    /// - `trip` - The trip the activity must belong to
    ///
    /// # Returns
    /// - `Ok(Some(Activity))` - The matching activity
    /// - `Ok(None)` - No activity with this ID exists under the trip
    /// - `Err(DataError)` - Classified database error during query
    pub async fn get_by_id(&self, id: i32, trip: &Trip) -> Result<Option<Activity>, DataError> {
        let entity = entity::prelude::Activity::find()
            .filter(entity::activity::Column::Id.eq(id))
            .filter(entity::activity::Column::TripId.eq(trip.id))
            .one(self.db)
            .await?;

        Ok(entity.map(Activity::from_entity))
    }

    /// Replaces every mutable field of an activity within the given trip.
    ///
    /// Executes a single `UPDATE` statement matching both the activity ID and
    /// the trip scope, then checks the affected-row count: zero matched rows
    /// yield `DataError::NotFound` whether the ID is unknown or owned by
    /// another trip. The trip reference itself is not rewritten. On success
    /// the returned shape merges the identity and scope with the input
    /// fields, without re-reading the row.
    ///
    /// # Arguments
    /// - `id` - ID of the activity to update
    /// - `trip` - The trip the activity must belong to
    /// - `param` - Replacement values for every mutable field
    ///
    /// # Returns
    /// - `Ok(Activity)` - The updated activity
    /// - `Err(DataError::NotFound)` - No activity with this ID exists under the trip
    /// - `Err(DataError)` - Classified database error during update
    pub async fn update(
        &self,
        id: i32,
        trip: &Trip,
        param: ActivityParam,
    ) -> Result<Activity, DataError> {
        let result = entity::prelude::Activity::update_many()
            .col_expr(
                entity::activity::Column::ActivityName,
                Expr::value(param.activity_name.clone()),
            )
            .col_expr(
                entity::activity::Column::ActivityAddress,
                Expr::value(param.activity_address.clone()),
            )
            .col_expr(entity::activity::Column::Longitude, Expr::value(param.longitude))
            .col_expr(entity::activity::Column::Latitude, Expr::value(param.latitude))
            .col_expr(entity::activity::Column::Rating, Expr::value(param.rating))
            .col_expr(
                entity::activity::Column::PictureUrl,
                Expr::value(param.picture_url.clone()),
            )
            .col_expr(
                entity::activity::Column::HotelDistance,
                Expr::value(param.hotel_distance),
            )
            .filter(entity::activity::Column::Id.eq(id))
            .filter(entity::activity::Column::TripId.eq(trip.id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound);
        }

        Ok(Activity::from_param(id, trip.id, param))
    }

    /// Deletes an activity within the given trip.
    ///
    /// # Arguments
    /// - `id` - ID of the activity to delete
    /// - `trip` - The trip the activity must belong to
    ///
    /// # Returns
    /// - `Ok(true)` - The activity existed under the trip and was deleted
    /// - `Ok(false)` - No activity with this ID exists under the trip
    /// - `Err(DataError)` - Classified database error during delete
    pub async fn delete(&self, id: i32, trip: &Trip) -> Result<bool, DataError> {
        let result = entity::prelude::Activity::delete_many()
            .filter(entity::activity::Column::Id.eq(id))
            .filter(entity::activity::Column::TripId.eq(trip.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
