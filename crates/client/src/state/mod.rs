//! State containers for client-side dependency injection
//!
//! This module contains the DI container that aggregates platform adapters.
//! It is a concrete implementation that belongs in the adapters layer, not
//! the ports layer.

mod platform;

pub use platform::Platform;
