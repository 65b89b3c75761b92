//! Per-payload processing: extract, normalize, validate.

use crate::fields::normalize_entry;
use crate::schema::NormalizedRecord;
use crate::search::extract_candidates;
use crate::validate::is_valid;
use gazette_sources::Origin;
use serde_json::Value;
use tracing::debug;

/// Run one raw payload through the full pipeline for a single source.
///
/// Candidates are discovered by the recursive search, normalized with the
/// given origin tag, and filtered down to valid records, preserving
/// discovery order.
pub fn process_payload(payload: &Value, term: &str, origin: Origin) -> Vec<NormalizedRecord> {
    let candidates = extract_candidates(payload, term);
    debug!(
        "[{}] Found {} raw matches containing {:?}",
        origin,
        candidates.len(),
        term
    );

    let records: Vec<NormalizedRecord> = candidates
        .iter()
        .filter_map(|candidate| normalize_entry(&candidate.value, origin))
        .filter(is_valid)
        .collect();

    debug!("[{}] {} records normalized", origin, records.len());
    records
}
