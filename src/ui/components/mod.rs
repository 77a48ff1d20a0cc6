//! Reusable UI components

pub mod bottom_nav;
pub mod dialog_component;
pub mod dialogs;
pub mod placeholder;
pub mod task_list_component;

pub use bottom_nav::BottomNavComponent;
pub use dialog_component::DialogComponent;
pub use task_list_component::TaskListComponent;
