//! Alkaa - A terminal to-do list with categories and alarms
//!
//! This library provides a keyboard-driven task manager: tasks grouped by
//! colored categories, per-task alarms with repeat cadences, and a reactive
//! UI that re-renders whenever the underlying data changes. Everything is
//! stored locally in SQLite.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Local database and data persistence
//! * [`service`] - Task and category operations on top of storage
//! * [`alarm`] - Alarm scheduling and cancellation
//! * [`viewmodel`] - Observable view-state and background operations
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Alarm scheduling abstraction and its storage-backed implementation
pub mod alarm;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Domain types shared across layers
pub mod model;

/// Repository layer for database operations
pub mod repositories;

/// Service layer for task and category operations
pub mod service;

/// Local storage layer backed by SQLite
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

/// View-models publishing observable view-state
pub mod viewmodel;

// Re-export entity models for convenient access
pub use entities::{category, task};
pub use model::{AlarmInterval, TaskWithCategory};
