//! Routed pages.

pub mod admin_dashboard;
pub mod login;
pub mod student_dashboard;
