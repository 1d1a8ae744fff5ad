//! Wire representation of feed items.
//!
//! # Design
//! Mirrors the JSON payload shape only. The field is named `image` here
//! because that is the payload key; the domain type calls it `url`.
//! Decoding through `Uuid` and `Url` enforces that the mandatory fields are
//! well formed. Only the 36-character hyphenated id form is accepted.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use url::Url;
use uuid::Uuid;

/// One entry of the `items` array as it appears on the wire.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemoteFeedItem {
    #[serde(deserialize_with = "hyphenated_uuid")]
    pub id: Uuid,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub image: Url,
}

/// `8-4-4-4-12` hex groups. Simple, braced and `urn:uuid:` forms are rejected.
fn hyphenated_uuid<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let bytes = raw.as_bytes();
    let hyphenated = bytes.len() == 36 && [8, 13, 18, 23].iter().all(|&i| bytes[i] == b'-');
    if !hyphenated {
        return Err(<D::Error as Error>::custom(format!("id is not a hyphenated uuid: {raw}")));
    }
    Uuid::try_parse(&raw).map_err(<D::Error as Error>::custom)
}
