//! steamstatus core: HTML statistic extraction, the stats record, and SVG rendering.
//!
//! This crate holds everything that is a pure function of text: the extractors
//! that read Steam Community markup, the flat [`StatsRecord`] they feed, and the
//! renderer that turns a record into an SVG card. It carries no transport or
//! runtime dependencies so it can be tested offline against captured pages.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Extractors never fail: unmatched or malformed markup degrades to the field's
//! default, so drifting upstream HTML cannot crash the service.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod extract;
pub mod record;
pub mod render;

/// Shared result type.
pub use error::{Result, SteamStatusError};
pub use record::StatsRecord;
