//! Multi-source gazette search aggregation.
//!
//! Composes the source clients and the normalization pipeline into one
//! operation: [`SearchService::search`] fans out one fetch per configured
//! source, waits for every outcome, and merges valid records while
//! partitioning per-source failures.

pub mod service;

pub use service::{AggregateResult, SearchService, SourceFailure, SEARCH_TERM};
