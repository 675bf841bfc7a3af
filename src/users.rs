//! Confirmed search results
//!
//! Holds the list produced by committing a query, either typed or picked from
//! the suggestions, and draws it below the input field.

pub mod users_render;
mod users_state;

pub use users_state::{UsersEvent, UsersState};
