//! Remote feed loading core.
//!
//! # Overview
//! Fetches the feed envelope through an injected `HttpClient`, validates the
//! status and payload, and delivers a list of `FeedImage` values to a
//! completion callback. The core performs no I/O of its own; a transport
//! implements `HttpClient` and calls back on whatever thread it uses.
//!
//! # Design
//! - `RemoteFeedItem` (wire) and `FeedImage` (domain) are separate types
//!   joined by an explicit conversion, so payload changes stay local.
//! - Errors collapse to `Connectivity` or `InvalidData`.
//! - A dropped `RemoteFeedLoader` never delivers a late result.
//! - The mock-server crate defines its own payload types; integration tests
//!   catch schema drift.

pub mod error;
pub mod http;
pub mod loader;
pub mod mapper;
pub mod remote_loader;
pub mod types;
pub mod wire;

pub use error::FeedError;
pub use http::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse, TransportError};
pub use loader::{FeedCompletion, FeedLoadResult, FeedLoader};
pub use remote_loader::RemoteFeedLoader;
pub use types::FeedImage;
pub use wire::RemoteFeedItem;
