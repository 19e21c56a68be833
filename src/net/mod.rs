//! Network layer: wire types and REST helpers for the attendance backend.

pub mod api;
pub mod types;
