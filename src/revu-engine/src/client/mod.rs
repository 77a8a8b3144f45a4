//! Provider client.
//!
//! [`ReviewModel`] is the seam the rest of Revu programs against; the
//! gateway holds one behind `Arc<dyn ReviewModel>` so tests can swap in
//! stubs without touching the network.

mod http;

pub use http::HttpReviewModel;

use async_trait::async_trait;

use crate::error::Result;

/// A text-completion provider that can review code.
#[async_trait]
pub trait ReviewModel: Send + Sync {
    /// Model identifier sent to the provider.
    fn model(&self) -> &str;

    /// Provider name, for logs.
    fn provider(&self) -> &str;

    /// Review `code` and return the provider's full prose answer.
    ///
    /// The submitted code is forwarded verbatim as a single-turn request
    /// with the fixed review instruction. No retries.
    async fn review(&self, code: &str) -> Result<String>;
}
