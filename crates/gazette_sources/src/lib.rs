//! Gazette API clients library.
//!
//! This library provides unified access to the Spanish state gazette
//! "datos abiertos" summary APIs:
//! - BOE: Boletín Oficial del Estado
//! - BORME: Boletín Oficial del Registro Mercantil
//!
//! Both endpoints serve a per-date summary document whose JSON shape is not
//! guaranteed, so payloads are exposed as dynamic [`serde_json::Value`]
//! trees and interpreted downstream.
//!
//! # Example
//!
//! ```ignore
//! use gazette_sources::{GazetteClient, SourceFetcher};
//!
//! let client = GazetteClient::boe();
//! let payload = client.fetch_summary("20251114").await?;
//! ```

pub mod client;
pub mod error;
pub mod fetcher;
pub mod types;

pub use client::GazetteClient;
pub use error::{Error, Result};
pub use fetcher::SourceFetcher;
pub use types::Origin;
