//! Client configuration.
//!
//! These types hold validated runtime values. Loading them from files or
//! the environment is left to the embedding application.

mod client;

pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_ORDER_TIMEOUT_SECONDS};
