//! Data shapes for activity operations.

/// An activity as returned by the data layer, including its assigned
/// identity and the reference to the trip it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// Unique identifier assigned by the store at creation.
    pub id: i32,
    /// Display name of the activity.
    pub activity_name: String,
    /// Street address of the activity.
    pub activity_address: String,
    /// Longitude coordinate of the activity location.
    pub longitude: f64,
    /// Latitude coordinate of the activity location.
    pub latitude: f64,
    /// Aggregate visitor rating.
    pub rating: f64,
    /// URL of a picture of the activity.
    pub picture_url: String,
    /// Distance from the traveller's hotel.
    pub hotel_distance: f64,
    /// ID of the trip this activity belongs to.
    pub trip_id: i32,
}

/// Caller-supplied fields for creating or replacing an activity.
///
/// The owning trip is not part of the input; it comes from the scope token
/// passed alongside, and is assigned once at creation.
#[derive(Debug, Clone)]
pub struct ActivityParam {
    pub activity_name: String,
    pub activity_address: String,
    pub longitude: f64,
    pub latitude: f64,
    pub rating: f64,
    pub picture_url: String,
    pub hotel_distance: f64,
}

impl Activity {
    /// Converts an entity model to the caller-facing activity shape.
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            activity_name: entity.activity_name,
            activity_address: entity.activity_address,
            longitude: entity.longitude,
            latitude: entity.latitude,
            rating: entity.rating,
            picture_url: entity.picture_url,
            hotel_distance: entity.hotel_distance,
            trip_id: entity.trip_id,
        }
    }

    /// Merges a store-assigned identity and trip scope with the input fields.
    ///
    /// Used after an update to produce the caller-facing shape without a
    /// round-trip read of the row that was just written.
    pub fn from_param(id: i32, trip_id: i32, param: ActivityParam) -> Self {
        Self {
            id,
            activity_name: param.activity_name,
            activity_address: param.activity_address,
            longitude: param.longitude,
            latitude: param.latitude,
            rating: param.rating,
            picture_url: param.picture_url,
            hotel_distance: param.hotel_distance,
            trip_id,
        }
    }
}
