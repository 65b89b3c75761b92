//! Minimum-field validation for normalized records.

use crate::schema::NormalizedRecord;

/// True when a record carries the minimum fields worth presenting: a
/// non-empty identifier, a non-empty title, and a PDF link with a transfer
/// protocol scheme.
///
/// Rejected records are dropped silently; they are subtrees that happened
/// to contain the search term without being presentable bulletin entries.
pub fn is_valid(record: &NormalizedRecord) -> bool {
    let has_pdf = record
        .pdf
        .as_ref()
        .and_then(|pdf| pdf.text.as_deref())
        .is_some_and(|text| text.starts_with("http"));

    !record.identifier.is_empty() && !record.title.is_empty() && has_pdf
}
