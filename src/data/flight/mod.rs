//! Flight data repository for database operations.
//!
//! This module provides the `FlightRepository` for managing flight records in
//! the database. All single-row operations are scoped to the owning trip, the
//! same way activity operations are: a flight ID that exists under a different
//! trip is treated as not found.

#[cfg(test)]
mod test;

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::error::DataError;
use crate::model::flight::{Flight, FlightParam};
use crate::model::trip::Trip;

/// Repository providing database operations for flights.
pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    /// Creates a new FlightRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FlightRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new flight.
    ///
    /// The owning trip comes from the `trip_id` field of the input. Inserting
    /// a flight for a trip that does not exist fails with
    /// `DataError::ForeignKeyViolation`.
    ///
    /// # Arguments
    /// - `param` - Input fields for the new flight, including the owning trip
    ///
    /// # Returns
    /// - `Ok(Flight)` - The created flight with generated ID
    /// - `Err(DataError)` - Classified database error during insert
    pub async fn create(&self, param: FlightParam) -> Result<Flight, DataError> {
        let entity = entity::flight::ActiveModel {
            number: ActiveValue::Set(param.number),
            departure_location: ActiveValue::Set(param.departure_location),
            arrival_location: ActiveValue::Set(param.arrival_location),
            departure_time: ActiveValue::Set(param.departure_time),
            arrival_time: ActiveValue::Set(param.arrival_time),
            trip_id: ActiveValue::Set(param.trip_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Flight::from_entity(entity))
    }

    /// Gets all flights for a trip, ordered by flight number.
    ///
    /// Returns an empty vector, not an error, when the trip has no flights.
    ///
    /// # Arguments
    /// - `trip` - The trip whose flights to list
    ///
    /// # Returns
    /// - `Ok(Vec<Flight>)` - The trip's flights sorted ascending by number
    /// - `Err(DataError)` - Classified database error during query
    pub async fn get_all_by_trip(&self, trip: &Trip) -> Result<Vec<Flight>, DataError> {
        let entities = entity::prelude::Flight::find()
            .filter(entity::flight::Column::TripId.eq(trip.id))
            .order_by_asc(entity::flight::Column::Number)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }

    /// Gets a flight by ID within the given trip.
    ///
    /// `Ok(None)` is returned both when the ID does not exist and when it
    /// belongs to another trip; callers cannot tell the two apart.
    ///
    /// # Arguments
    /// - `id` - ID of the flight to fetch
    /// - `trip` - The trip the flight must belong to
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - The matching flight
    /// - `Ok(None)` - No flight with this ID exists under the trip
    /// - `Err(DataError)` - Classified database error during query
    pub async fn get_by_id(&self, id: i32, trip: &Trip) -> Result<Option<Flight>, DataError> {
        let entity = entity::prelude::Flight::find()
            .filter(entity::flight::Column::Id.eq(id))
            .filter(entity::flight::Column::TripId.eq(trip.id))
            .one(self.db)
            .await?;

        Ok(entity.map(Flight::from_entity))
    }

    /// Replaces every mutable field of a flight within the given trip.
    ///
    /// Executes a single `UPDATE` statement matching both the flight ID and
    /// the trip scope, then checks the affected-row count: zero matched rows
    /// yield `DataError::NotFound` whether the ID is unknown or owned by
    /// another trip. The `trip_id` input field is rewritten too, which is the
    /// one explicit way to move a flight to another trip. On success the
    /// returned shape merges the identity with the input fields, without
    /// re-reading the row.
    ///
    /// # Arguments
    /// - `id` - ID of the flight to update
    /// - `trip` - The trip the flight must currently belong to
    /// - `param` - Replacement values for every mutable field
    ///
    /// # Returns
    /// - `Ok(Flight)` - The updated flight
    /// - `Err(DataError::NotFound)` - No flight with this ID exists under the trip
    /// - `Err(DataError)` - Classified database error during update
    pub async fn update(
        &self,
        id: i32,
        trip: &Trip,
        param: FlightParam,
    ) -> Result<Flight, DataError> {
        let result = entity::prelude::Flight::update_many()
            .col_expr(entity::flight::Column::Number, Expr::value(param.number.clone()))
            .col_expr(
                entity::flight::Column::DepartureLocation,
                Expr::value(param.departure_location.clone()),
            )
            .col_expr(
                entity::flight::Column::ArrivalLocation,
                Expr::value(param.arrival_location.clone()),
            )
            .col_expr(
                entity::flight::Column::DepartureTime,
                Expr::value(param.departure_time),
            )
            .col_expr(
                entity::flight::Column::ArrivalTime,
                Expr::value(param.arrival_time),
            )
            .col_expr(entity::flight::Column::TripId, Expr::value(param.trip_id))
            .filter(entity::flight::Column::Id.eq(id))
            .filter(entity::flight::Column::TripId.eq(trip.id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound);
        }

        Ok(Flight::from_param(id, param))
    }

    /// Deletes a flight within the given trip.
    ///
    /// # Arguments
    /// - `id` - ID of the flight to delete
    /// - `trip` - The trip the flight must belong to
    ///
    /// # Returns
    /// - `Ok(true)` - The flight existed under the trip and was deleted
    /// - `Ok(false)` - No flight with this ID exists under the trip
    /// - `Err(DataError)` - Classified database error during delete
    pub async fn delete(&self, id: i32, trip: &Trip) -> Result<bool, DataError> {
        let result = entity::prelude::Flight::delete_many()
            .filter(entity::flight::Column::Id.eq(id))
            .filter(entity::flight::Column::TripId.eq(trip.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
