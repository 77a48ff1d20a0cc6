//! Utility modules shared across the application.

pub mod color;
pub mod datetime;
