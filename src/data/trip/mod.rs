//! Trip data repository for database operations.
//!
//! This module provides the `TripRepository` for managing trip records in the
//! database. It handles creation, queries, full-field updates, and deletion
//! with conversion between entity models and caller-facing shapes at the
//! data layer boundary.

#[cfg(test)]
mod test;

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::error::DataError;
use crate::model::trip::{Trip, TripParam};

/// Repository providing database operations for trips.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting trip records.
pub struct TripRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripRepository<'a> {
    /// Creates a new TripRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TripRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new trip owned by the given account.
    ///
    /// Inserts a new trip record binding every input field plus the owning
    /// account reference. The returned shape carries the store-assigned
    /// identity together with the fields that were written.
    ///
    /// # Arguments
    /// - `user_id` - ID of the account that owns the trip
    /// - `param` - Input fields for the new trip
    ///
    /// # Returns
    /// - `Ok(Trip)` - The created trip with generated ID
    /// - `Err(DataError)` - Classified database error during insert
    pub async fn create(&self, user_id: i32, param: TripParam) -> Result<Trip, DataError> {
        let entity = entity::trip::ActiveModel {
            trip_name: ActiveValue::Set(param.trip_name),
            destination: ActiveValue::Set(param.destination),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            num_people: ActiveValue::Set(param.num_people),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Trip::from_entity(entity))
    }

    /// Gets all trips, ordered alphabetically by trip name.
    ///
    /// Returns an empty vector, not an error, when no trips exist. The
    /// ordering is stable across repeated calls with no mutation between
    /// them.
    ///
    /// # Returns
    /// - `Ok(Vec<Trip>)` - All trips sorted ascending by name
    /// - `Err(DataError)` - Classified database error during query
    pub async fn get_all(&self) -> Result<Vec<Trip>, DataError> {
        let entities = entity::prelude::Trip::find()
            .order_by_asc(entity::trip::Column::TripName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Trip::from_entity).collect())
    }

    /// Gets a trip by ID.
    ///
    /// Absence is not an error: `Ok(None)` is returned when no trip has the
    /// given ID.
    ///
    /// # Arguments
    /// - `id` - ID of the trip to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - The matching trip
    /// - `Ok(None)` - No trip with this ID exists
    /// - `Err(DataError)` - Classified database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Trip>, DataError> {
        let entity = entity::prelude::Trip::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Trip::from_entity))
    }

    /// Replaces every mutable field of a trip.
    ///
    /// Executes a single `UPDATE` statement rewriting all input fields for
    /// the row matching the ID, then checks the affected-row count: if no
    /// row matched, `DataError::NotFound` is returned and nothing is
    /// persisted. On success the returned shape is the given identity merged
    /// with the input fields, without re-reading the row.
    ///
    /// # Arguments
    /// - `id` - ID of the trip to update
    /// - `param` - Replacement values for every mutable field
    ///
    /// # Returns
    /// - `Ok(Trip)` - The updated trip
    /// - `Err(DataError::NotFound)` - No trip with this ID exists
    /// - `Err(DataError)` - Classified database error during update
    pub async fn update(&self, id: i32, param: TripParam) -> Result<Trip, DataError> {
        let result = entity::prelude::Trip::update_many()
            .col_expr(
                entity::trip::Column::TripName,
                Expr::value(param.trip_name.clone()),
            )
            .col_expr(
                entity::trip::Column::Destination,
                Expr::value(param.destination.clone()),
            )
            .col_expr(entity::trip::Column::StartDate, Expr::value(param.start_date))
            .col_expr(entity::trip::Column::EndDate, Expr::value(param.end_date))
            .col_expr(entity::trip::Column::NumPeople, Expr::value(param.num_people))
            .filter(entity::trip::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound);
        }

        Ok(Trip::from_param(id, param))
    }

    /// Deletes a trip.
    ///
    /// Child flights and activities are removed with it through the CASCADE
    /// foreign keys.
    ///
    /// # Arguments
    /// - `id` - ID of the trip to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The trip existed and was deleted
    /// - `Ok(false)` - No trip with this ID exists
    /// - `Err(DataError)` - Classified database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DataError> {
        let result = entity::prelude::Trip::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
