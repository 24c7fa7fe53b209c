//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let trip = factory::trip::create_trip(&db).await?;
//!     let flight = factory::flight::create_flight(&db, trip.id).await?;
//!
//!     // Create a child with its parent in one call
//!     let (trip, activity) = factory::helpers::create_activity_with_trip(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let trip = factory::trip::TripFactory::new(&db)
//!     .trip_name("Paris")
//!     .destination("France")
//!     .num_people(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `trip` - Create trip entities
//! - `flight` - Create flight entities scoped to a trip
//! - `activity` - Create activity entities scoped to a trip
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod activity;
pub mod flight;
pub mod helpers;
pub mod trip;

// Re-export commonly used factory functions for concise usage
pub use activity::create_activity;
pub use flight::create_flight;
pub use trip::create_trip;
