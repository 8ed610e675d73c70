//! Terminal front-end: an interactive menu over the workflows.

pub mod menu;
pub mod render;

pub use menu::run_menu;
