//! Versicle Client Library
//!
//! The verse-lookup collaborator for Versicle: an async client for the
//! szentiras.eu text service, heading handling for fetched verses, and a
//! canned fixture source for the deterministic debug mode.
//!
//! The session core never touches the network; it hands a resolved
//! [`versicle_core::VerseRef`] to whichever [`versicle_core::VerseSource`]
//! implementation the application wires in.

pub mod fixture;
pub mod headings;
pub mod szentiras;

pub use fixture::FixtureSource;
pub use headings::apply_heading_markers;
pub use szentiras::{SzentirasClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use thiserror::Error;

/// Errors from verse text lookups.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed (connection, timeout, decode).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("verse service returned status {0}")]
    Status(u16),
    /// The response parsed but carried no verse text.
    #[error("response carried no verse text")]
    MissingText,
    /// No fixture entry covers the requested verse.
    #[error("no fixture verse for {0}")]
    NotFound(String),
}
