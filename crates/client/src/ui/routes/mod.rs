//! Application routes
//!
//! Two screens: the workshop is the whole app, and the login screen exists
//! for first-run server setup and expired sessions.

use dioxus::prelude::*;

mod login;
mod workshop;

pub use login::LoginRoute;
pub use workshop::WorkshopRoute;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    WorkshopRoute {},
    #[route("/login")]
    LoginRoute {},
}
