//! Shared UI components.

pub mod navbar;
pub mod route_guard;
