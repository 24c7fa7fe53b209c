//! Data shapes for flight operations.

use chrono::NaiveDate;

/// A flight as returned by the data layer, including its assigned identity
/// and the reference to the trip it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// Unique identifier assigned by the store at creation.
    pub id: i32,
    /// Carrier and flight number, e.g. `"DL0042"`.
    pub number: String,
    /// Where the flight departs from.
    pub departure_location: String,
    /// Where the flight arrives.
    pub arrival_location: String,
    /// Departure date.
    pub departure_time: NaiveDate,
    /// Arrival date.
    pub arrival_time: NaiveDate,
    /// ID of the trip this flight belongs to.
    pub trip_id: i32,
}

/// Caller-supplied fields for creating or replacing a flight.
///
/// `trip_id` is part of the input: it assigns the owning trip at creation
/// and is the one explicit way to move a flight to another trip on update.
#[derive(Debug, Clone)]
pub struct FlightParam {
    pub number: String,
    pub departure_location: String,
    pub arrival_location: String,
    pub departure_time: NaiveDate,
    pub arrival_time: NaiveDate,
    pub trip_id: i32,
}

impl Flight {
    /// Converts an entity model to the caller-facing flight shape.
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            id: entity.id,
            number: entity.number,
            departure_location: entity.departure_location,
            arrival_location: entity.arrival_location,
            departure_time: entity.departure_time,
            arrival_time: entity.arrival_time,
            trip_id: entity.trip_id,
        }
    }

    /// Merges a store-assigned identity with the input fields.
    ///
    /// Used after an update to produce the caller-facing shape without a
    /// round-trip read of the row that was just written.
    pub fn from_param(id: i32, param: FlightParam) -> Self {
        Self {
            id,
            number: param.number,
            departure_location: param.departure_location,
            arrival_location: param.arrival_location,
            departure_time: param.departure_time,
            arrival_time: param.arrival_time,
            trip_id: param.trip_id,
        }
    }
}
