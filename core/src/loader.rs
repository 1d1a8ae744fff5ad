//! Loader abstraction consumed by application code.

use crate::error::FeedError;
use crate::types::FeedImage;

/// Outcome of one `load` call.
pub type FeedLoadResult = Result<Vec<FeedImage>, FeedError>;

/// Callback receiving the outcome of a `load` call.
pub type FeedCompletion = Box<dyn FnOnce(FeedLoadResult) + Send + 'static>;

/// Something that can produce the current list of feed images.
///
/// Implementations call `completion` at most once per `load`. It may run on
/// any thread, and completions of separate calls may arrive in any order.
pub trait FeedLoader {
    fn load(&self, completion: FeedCompletion);
}
