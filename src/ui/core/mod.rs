//! Core UI building blocks.
//!
//! - [`actions`] - Action definitions and navigation state
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, HomeSection};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
