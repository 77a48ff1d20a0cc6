//! Local persistence for tasks and categories.
//!
//! This module owns the SQLite database used by the application. The schema
//! is derived from the SeaORM entities at startup; all queries go through the
//! repository layer.

pub mod db;

pub use db::LocalStorage;
