//! Error type surfaced to callers of a feed loader.
//!
//! # Design
//! The taxonomy is deliberately two-member. `Connectivity` means the HTTP
//! exchange never produced a response; `InvalidData` covers everything that
//! can go wrong once a response exists (unexpected status, malformed JSON, an
//! item missing its id or image). The decode cause is logged, not carried,
//! so callers cannot come to depend on finer distinctions.

use thiserror::Error;

/// Errors delivered to a `FeedLoader` completion.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FeedError {
    /// The HTTP exchange did not complete.
    #[error("connectivity failure")]
    Connectivity,

    /// The exchange completed but the status was not 200 or the payload
    /// did not decode into a valid feed envelope.
    #[error("invalid data")]
    InvalidData,
}
