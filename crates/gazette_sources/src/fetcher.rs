//! Source fetcher trait (provider interface for the search pipeline).

use crate::error::Result;
use crate::types::Origin;
use async_trait::async_trait;

/// Trait for fetching one gazette source's daily summary.
///
/// Each implementation is bound to a single [`Origin`] supplied by
/// configuration, not discovered at runtime. A fetch either resolves with
/// the raw JSON payload or fails with a descriptive error (non-success
/// status, unparseable body). One attempt per call; retries are the
/// caller's decision.
///
/// # Example
///
/// ```ignore
/// #[async_trait]
/// impl SourceFetcher for GazetteClient {
///     fn origin(&self) -> Origin {
///         self.origin
///     }
///
///     async fn fetch_summary(&self, formatted_date: &str) -> Result<Value> {
///         // GET {base_url}/{formatted_date}
///     }
/// }
/// ```
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// The source this fetcher reads from.
    fn origin(&self) -> Origin;

    /// Fetch the raw summary payload for a compact `YYYYMMDD` date.
    ///
    /// The response shape is not controlled by this crate and varies between
    /// sources and even between dates from the same source; the body is
    /// returned as a dynamic JSON tree.
    async fn fetch_summary(&self, formatted_date: &str) -> Result<serde_json::Value>;
}
