//! GitHub user search
//!
//! The HTTP client plus the `UserLookup` seam the suggestion pipeline and the
//! user list depend on, so both can run against a fake in tests.

mod client;
mod models;

pub use client::{GitHubClient, LookupError, UserLookup};
pub use models::{SearchResponse, SuggestionItem};
