//! Normalized bulletin record schema definitions.

use gazette_sources::Origin;
use serde::{Deserialize, Serialize};

/// PDF link information for a bulletin entry.
///
/// Upstream shapes vary: some responses inline a bare URL string, others
/// nest an object with size and page metadata, sometimes under an
/// `@attributes` wrapper. Every field is optional here; records without a
/// usable PDF link are rejected by [`is_valid`](crate::validate::is_valid).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfInfo {
    /// URL of the PDF document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Document size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    /// Document size in kilobytes, as reported upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_kbytes: Option<String>,
    /// First page of the entry within the bulletin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<String>,
    /// Last page of the entry within the bulletin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page: Option<String>,
}

impl PdfInfo {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.size_bytes.is_none()
            && self.size_kbytes.is_none()
            && self.first_page.is_none()
            && self.last_page.is_none()
    }
}

/// Canonical bulletin entry produced by the normalization pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Bulletin identifier (e.g., "BOE-A-2025-12345").
    pub identifier: String,
    /// Control number, when the source reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<String>,
    /// Entry title; falls back to the identifier when the source has none.
    pub title: String,
    /// PDF link information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<PdfInfo>,
    /// HTML version URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// XML version URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml_url: Option<String>,
    /// Source the entry was found in.
    pub origin: Origin,
}
