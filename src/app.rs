//! Application shell
//!
//! Wires the search input, the user list and the alert popup together and
//! routes terminal events between them.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::App;
