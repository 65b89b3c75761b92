//! Recursive text search and candidate extraction over raw payloads.

use serde_json::Value;

/// Candidate bulletin entry pulled out of a raw payload.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The extracted subtree, prior to normalization.
    pub value: Value,
    /// Structural path of the subtree within the payload (diagnostic only).
    pub path: String,
}

/// Case-insensitive substring search over an arbitrarily nested JSON value.
///
/// A string matches when its lower-cased form contains the lower-cased
/// term; sequences and mappings match when any element or value matches;
/// numbers, booleans, and null never match.
pub fn value_matches(value: &Value, term: &str) -> bool {
    matches_lower(value, &term.to_lowercase())
}

fn matches_lower(value: &Value, term_lower: &str) -> bool {
    match value {
        Value::String(s) => s.to_lowercase().contains(term_lower),
        Value::Array(items) => items.iter().any(|item| matches_lower(item, term_lower)),
        Value::Object(map) => map.values().any(|v| matches_lower(v, term_lower)),
        _ => false,
    }
}

/// Collect every sequence element anywhere in `value` that contains `term`.
///
/// Extraction recurses into every sequence element and every mapping value
/// regardless of match outcome, so a matching entry nested inside another
/// matching entry is reported twice, once per level. Callers that need
/// unique entries must deduplicate themselves.
pub fn extract_candidates(value: &Value, term: &str) -> Vec<Candidate> {
    let mut results = Vec::new();
    collect(value, "", &term.to_lowercase(), &mut results);
    results
}

fn collect(value: &Value, path: &str, term_lower: &str, results: &mut Vec<Candidate>) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, index);
                if matches_lower(item, term_lower) {
                    results.push(Candidate {
                        value: item.clone(),
                        path: item_path.clone(),
                    });
                }
                collect(item, &item_path, term_lower, results);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                collect(child, &child_path, term_lower, results);
            }
        }
        _ => {}
    }
}
