//! Terminal GitHub user search with debounced autocomplete suggestions

pub mod app;
pub mod config;
pub mod error;
pub mod github;
pub mod input;
pub mod logging;
pub mod notification;
pub mod pipeline;
pub mod store;
pub mod users;
pub mod widgets;

mod test_utils;
