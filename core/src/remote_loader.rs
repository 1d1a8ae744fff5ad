//! Feed loader backed by an `HttpClient`.
//!
//! # Design
//! `RemoteFeedLoader` owns its state through a single `Arc`. Each `load`
//! hands the transport a closure holding only a `Weak` to that state, so
//! dropping the loader while a request is in flight makes the eventual
//! response a no-op instead of a late delivery. Requests from separate
//! `load` calls share nothing.

use std::sync::{Arc, Weak};

use url::Url;

use crate::error::FeedError;
use crate::http::{HttpClient, HttpClientResult};
use crate::loader::{FeedCompletion, FeedLoadResult, FeedLoader};
use crate::mapper;
use crate::types::FeedImage;
use crate::wire::RemoteFeedItem;

struct Shared {
    url: Url,
    client: Arc<dyn HttpClient>,
}

/// Loads the feed from a fixed URL through an injected `HttpClient`.
///
/// Construction issues no request. Every `load` issues exactly one GET.
pub struct RemoteFeedLoader {
    shared: Arc<Shared>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            shared: Arc::new(Shared { url, client }),
        }
    }

    pub fn url(&self) -> &Url {
        &self.shared.url
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: FeedCompletion) {
        tracing::debug!(url = %self.shared.url, "requesting feed");
        let owner: Weak<Shared> = Arc::downgrade(&self.shared);
        self.shared.client.get(
            &self.shared.url,
            Box::new(move |result| {
                // Held until delivery so the loader cannot vanish mid-completion.
                let Some(_alive) = owner.upgrade() else {
                    tracing::debug!("feed loader dropped before response; discarding result");
                    return;
                };
                completion(map_result(result));
            }),
        );
    }
}

fn map_result(result: HttpClientResult) -> FeedLoadResult {
    let response = result.map_err(|e| {
        tracing::warn!(error = %e, "feed request did not complete");
        FeedError::Connectivity
    })?;
    let items = mapper::map(&response.body, response.status)?;
    Ok(to_models(items))
}

fn to_models(items: Vec<RemoteFeedItem>) -> Vec<FeedImage> {
    items
        .into_iter()
        .map(|item| FeedImage {
            id: item.id,
            description: item.description,
            location: item.location,
            url: item.image,
        })
        .collect()
}
