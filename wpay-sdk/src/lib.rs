//! Client SDK for the Wallet Pay store API.
//!
//! * [`signature`] – verification of signed webhook deliveries
//! * [`objects`] – request, response and webhook types
//! * [`config`] – client configuration
//! * [`client`] – typed HTTP client (`client` feature)

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
pub mod signature;
