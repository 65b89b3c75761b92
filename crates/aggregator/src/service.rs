//! Concurrent multi-source search service.

use chrono::NaiveDate;
use futures::future::join_all;
use gazette_sources::{Origin, SourceFetcher};
use normalizer::{process_payload, NormalizedRecord};
use std::sync::Arc;
use tracing::{error, info};

/// Fixed search term applied to every source.
pub const SEARCH_TERM: &str = "Coruña";

/// Failure of a single source during aggregation.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    /// Source the fetch was issued against.
    pub origin: Origin,
    /// Human-readable failure description.
    pub message: String,
}

/// Merged outcome of one search across all configured sources.
///
/// Records keep source-configuration order first, discovery order within a
/// source. A failing source never removes another source's records; callers
/// decide how to present partial success. Zero records with a non-empty
/// failure set means the sources broke; zero records with no failures means
/// nothing matched.
#[derive(Debug, Clone, Default)]
pub struct AggregateResult {
    /// Valid records from every source that responded.
    pub records: Vec<NormalizedRecord>,
    /// One entry per source whose fetch or parse failed.
    pub failures: Vec<SourceFailure>,
}

/// Drives the configured gazette sources for one search action.
///
/// Sources are searched in configuration order (primary first). Each
/// search issues one concurrent fetch per source and waits for every
/// outcome before merging; no retries.
pub struct SearchService {
    sources: Vec<Arc<dyn SourceFetcher>>,
    term: String,
}

impl SearchService {
    /// Create a service over the given sources with the fixed search term.
    pub fn new(sources: Vec<Arc<dyn SourceFetcher>>) -> Self {
        Self::with_term(sources, SEARCH_TERM)
    }

    /// Create a service with a custom search term.
    pub fn with_term(sources: Vec<Arc<dyn SourceFetcher>>, term: impl Into<String>) -> Self {
        Self {
            sources,
            term: term.into(),
        }
    }

    /// Search every configured source for the given date.
    ///
    /// This never fails as a whole: per-source transport and parse errors
    /// are collected into the result's failure set while the remaining
    /// sources proceed undisturbed.
    pub async fn search(&self, date: NaiveDate) -> AggregateResult {
        let formatted_date = date.format("%Y%m%d").to_string();
        info!(
            "Searching {} source(s) for {:?} on {}",
            self.sources.len(),
            self.term,
            formatted_date
        );

        let fetches = self.sources.iter().map(|source| {
            let formatted_date = formatted_date.clone();
            async move {
                let payload = source.fetch_summary(&formatted_date).await?;
                Ok::<_, gazette_sources::Error>(process_payload(
                    &payload,
                    &self.term,
                    source.origin(),
                ))
            }
        });

        // join_all keeps input order and awaits every future to completion,
        // so one source failing never cancels the others.
        let outcomes = join_all(fetches).await;

        let mut result = AggregateResult::default();
        for (source, outcome) in self.sources.iter().zip(outcomes) {
            match outcome {
                Ok(records) => {
                    info!("[{}] {} valid record(s)", source.origin(), records.len());
                    result.records.extend(records);
                }
                Err(e) => {
                    error!("[{}] Source failed: {}", source.origin(), e);
                    result.failures.push(SourceFailure {
                        origin: source.origin(),
                        message: e.to_string(),
                    });
                }
            }
        }

        result
    }
}
