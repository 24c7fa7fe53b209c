//! Data shapes for trip operations.

use chrono::NaiveDate;

/// A trip as returned by the data layer, including its assigned identity.
///
/// Trips are the scope for flights and activities: callers fetch a `Trip`
/// first and pass it to the child repositories as the scope token. The
/// owning account reference stays inside the data layer and is not exposed
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Unique identifier assigned by the store at creation.
    pub id: i32,
    /// Display name of the trip.
    pub trip_name: String,
    /// Destination of the trip.
    pub destination: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
    /// Number of people travelling.
    pub num_people: i32,
}

/// Caller-supplied fields for creating or replacing a trip.
#[derive(Debug, Clone)]
pub struct TripParam {
    pub trip_name: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_people: i32,
}

impl Trip {
    /// Converts an entity model to the caller-facing trip shape.
    ///
    /// This conversion happens at the data layer boundary to ensure entity
    /// models never leak into upper layers.
    pub fn from_entity(entity: entity::trip::Model) -> Self {
        Self {
            id: entity.id,
            trip_name: entity.trip_name,
            destination: entity.destination,
            start_date: entity.start_date,
            end_date: entity.end_date,
            num_people: entity.num_people,
        }
    }

    /// Merges a store-assigned identity with the input fields.
    ///
    /// Used after an update to produce the caller-facing shape without a
    /// round-trip read of the row that was just written.
    pub fn from_param(id: i32, param: TripParam) -> Self {
        Self {
            id,
            trip_name: param.trip_name,
            destination: param.destination,
            start_date: param.start_date,
            end_date: param.end_date,
            num_people: param.num_people,
        }
    }
}
