//! Presentation layer - Dioxus UI components and app state

pub mod components;
pub mod format;
pub mod services;
pub mod state;

pub use services::Services;
