//! Caller-facing data shapes for the persistence core.
//!
//! Each entity has an input shape (the fields a caller supplies to create or
//! replace a record, never carrying identity) and an output shape (identity
//! plus all fields, plus the owning trip reference for child entities).
//! Conversion from entity models happens here, at the data layer boundary,
//! so entity models never leak into upper layers. Rows are decoded by column
//! name through the derived entity models, never by tuple position.

pub mod activity;
pub mod flight;
pub mod trip;
