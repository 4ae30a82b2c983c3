//! steamstatus gateway library entry.
//!
//! This crate wires config, the outbound page fetcher, the stats aggregator,
//! and the HTTP transport into a small axum service. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod fetch;
pub mod ops;
pub mod router;
pub mod stats;
pub mod transport;
