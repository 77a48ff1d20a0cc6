//! Terminal user interface.
//!
//! Component-based: the [`app_component::AppComponent`] owns the section
//! state machine and composes the child components under `components/`.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;

pub use app_component::AppComponent;
pub use core::HomeSection;
pub use renderer::run_app;
