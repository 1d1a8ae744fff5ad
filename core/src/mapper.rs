//! Validates a completed HTTP exchange and decodes the feed envelope.
//!
//! # Design
//! Decoding is all-or-nothing. A non-200 status, malformed JSON, a missing
//! `items` key, or any single item with a bad `id` or `image` rejects the
//! whole payload with `FeedError::InvalidData`. No partial list is returned.

use serde::Deserialize;

use crate::error::FeedError;
use crate::wire::RemoteFeedItem;

/// The only status code accepted as success.
pub const OK_200: u16 = 200;

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// Decode `body` into wire items if `status` is 200 and the payload is a
/// well-formed envelope.
pub fn map(body: &[u8], status: u16) -> Result<Vec<RemoteFeedItem>, FeedError> {
    if status != OK_200 {
        tracing::debug!(status, "rejecting feed response with unexpected status");
        return Err(FeedError::InvalidData);
    }
    let root: Root = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "feed payload failed to decode");
        FeedError::InvalidData
    })?;
    Ok(root.items)
}
