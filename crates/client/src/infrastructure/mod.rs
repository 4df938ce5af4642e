//! Infrastructure adapters
//!
//! Platform-specific implementations of the outbound ports: the HTTP
//! transport behind `RawApiPort` and the desktop/browser services behind
//! `PlatformPort`. The correct adapter set is selected at compile time
//! based on the target architecture.

pub mod http_client;
pub mod platform;

use std::future::Future;

/// Spawn a fire-and-forget task that outlives the calling component.
///
/// Tasks land on the root scope, so a toast timer or an in-flight save keeps
/// running when the originating component unmounts. Must be called from
/// inside the Dioxus runtime (a component, hook, or event handler).
pub fn spawn_task<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    let _ = dioxus::prelude::spawn_forever(future);
}
