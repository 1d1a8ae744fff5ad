//! Domain model handed to application code.
//!
//! # Design
//! `FeedImage` carries no serde derives. It is built only from the wire
//! model by an explicit field-by-field conversion in the remote loader, so a
//! change in the JSON payload never ripples into this type.

use url::Url;
use uuid::Uuid;

/// A single image entry of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedImage {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}
