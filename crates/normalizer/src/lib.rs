//! Normalization pipeline for gazette bulletin payloads.
//!
//! Transforms raw summary payloads of arbitrary shape into canonical
//! bulletin records:
//!
//! ```text
//! Raw payload --> extract_candidates --> normalize_entry --> is_valid --> NormalizedRecord
//! ```
//!
//! The upstream APIs guarantee no schema: field names vary between sources
//! and between dates from the same source. The pipeline therefore works
//! over the dynamic JSON tree, pattern-matching on the value shape instead
//! of assuming one, and reconciles known field-name variants into the
//! [`NormalizedRecord`] type.
//!
//! # Usage
//!
//! ```ignore
//! use gazette_sources::Origin;
//! use normalizer::process_payload;
//!
//! let records = process_payload(&payload, "Coruña", Origin::Boe);
//! ```

pub mod fields;
pub mod pipeline;
pub mod schema;
pub mod search;
pub mod validate;

pub use fields::normalize_entry;
pub use pipeline::process_payload;
pub use schema::{NormalizedRecord, PdfInfo};
pub use search::{extract_candidates, value_matches, Candidate};
pub use validate::is_valid;
