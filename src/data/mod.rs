//! Database repository layer for all trip-planning entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity in the application. Repositories use SeaORM entity models internally and return
//! the shapes from [`crate::model`] to maintain separation between the data layer and the
//! layers above it. All database queries, inserts, updates, and deletes are performed
//! through these repositories, over a connection injected at construction.
//!
//! Flights and activities are always addressed within the scope of their owning trip:
//! reads, updates, and deletes match both the child's identity and the trip's identity, so
//! a child that exists under a different trip is indistinguishable from one that does not
//! exist at all.

pub mod activity;
pub mod flight;
pub mod trip;
