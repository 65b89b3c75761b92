//! Field normalization for heterogeneous bulletin entry shapes.
//!
//! The summary APIs do not agree on field names between sources, and a
//! single source can change shape between dates. Each canonical field is
//! resolved by trying an ordered list of known key variants and taking the
//! first that is present, where null and the empty string count as absent.

use crate::schema::{NormalizedRecord, PdfInfo};
use gazette_sources::Origin;
use serde_json::{Map, Value};

const IDENTIFIER_KEYS: &[&str] = &["identificador", "id", "identidad", "codigo", "codigoCompleto"];
const CONTROL_KEYS: &[&str] = &[
    "control",
    "numControl",
    "num_control",
    "numero_control",
    "numeroControl",
];
const TITLE_KEYS: &[&str] = &["titulo", "title", "nombre", "descripcion", "texto"];
const PDF_KEYS: &[&str] = &["url_pdf", "pdf", "urlPdf"];
const HTML_KEYS: &[&str] = &["url_html", "url", "enlace"];
const XML_KEYS: &[&str] = &["url_xml", "xml"];
const URL_OBJECT_KEYS: &[&str] = &["url", "href", "link", "texto", "text", "#text"];
const PDF_TEXT_KEYS: &[&str] = &["texto", "url", "href", "link", "#text", "__text"];

/// Map a candidate entry onto the canonical record shape.
///
/// Returns `None` when the entry is not a mapping or resolves no string
/// identifier; such candidates can never pass validation. The title falls
/// back to the identifier when no title-like field is present.
pub fn normalize_entry(entry: &Value, origin: Origin) -> Option<NormalizedRecord> {
    let map = entry.as_object()?;

    let identifier = match pick_first(map, IDENTIFIER_KEYS) {
        Some(Value::String(s)) => s.clone(),
        _ => return None,
    };
    let title = match pick_first(map, TITLE_KEYS) {
        Some(Value::String(s)) => s.clone(),
        Some(_) => return None,
        None => identifier.clone(),
    };

    Some(NormalizedRecord {
        control: pick_first(map, CONTROL_KEYS).and_then(string_or_number),
        pdf: pick_first(map, PDF_KEYS).and_then(normalize_pdf_field),
        html_url: pick_first(map, HTML_KEYS).and_then(normalize_url_field),
        xml_url: pick_first(map, XML_KEYS).and_then(normalize_url_field),
        identifier,
        title,
        origin,
    })
}

/// First value among `keys` that is present, non-null, and not the empty
/// string. First-present wins; there is no fallthrough on type mismatch.
fn pick_first<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| map.get(*key).filter(|v| !is_absent(v)))
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Coerce a value that should be a string; numbers are rendered in their
/// decimal form. Sources disagree on whether sizes and control numbers are
/// strings or numbers.
fn string_or_number(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Resolve a URL-ish field that is either a bare string or an object
/// wrapping the link under one of several keys.
fn normalize_url_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => pick_first(map, URL_OBJECT_KEYS).and_then(string_or_number),
        _ => None,
    }
}

/// Normalize the PDF field: a bare URL string, or an object carrying the
/// link plus size and page metadata, possibly under `@attributes` or
/// `atributos`. Explicit fields win over the attributes block. Collapses to
/// `None` when nothing resolves.
fn normalize_pdf_field(value: &Value) -> Option<PdfInfo> {
    match value {
        Value::String(s) => Some(PdfInfo {
            text: Some(s.clone()),
            ..PdfInfo::default()
        }),
        Value::Object(map) => {
            let attributes = map
                .get("@attributes")
                .or_else(|| map.get("atributos"))
                .and_then(Value::as_object);
            let from_attrs = |key: &str| {
                attributes
                    .and_then(|attrs| attrs.get(key))
                    .filter(|v| !is_absent(v))
            };
            let resolve = |key: &str| {
                map.get(key)
                    .filter(|v| !is_absent(v))
                    .or_else(|| from_attrs(key))
            };

            let text = pick_first(map, PDF_TEXT_KEYS)
                .and_then(string_or_number)
                .or_else(|| from_attrs("texto").and_then(string_or_number));

            let pdf = PdfInfo {
                text,
                size_bytes: resolve("szBytes").and_then(as_size_bytes),
                size_kbytes: resolve("szKBytes").and_then(string_or_number),
                first_page: resolve("pagina_inicial").and_then(string_or_number),
                last_page: resolve("pagina_final").and_then(string_or_number),
            };

            (!pdf.is_empty()).then_some(pdf)
        }
        _ => None,
    }
}

fn as_size_bytes(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier_first_present_wins() {
        let entry = json!({"identificador": "A", "id": "B"});
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        assert_eq!(record.identifier, "A");
    }

    #[test]
    fn test_identifier_empty_string_treated_as_absent() {
        let entry = json!({"identificador": "", "id": "B"});
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        assert_eq!(record.identifier, "B");
    }

    #[test]
    fn test_identifier_null_treated_as_absent() {
        let entry = json!({"identificador": null, "codigo": "C-7"});
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        assert_eq!(record.identifier, "C-7");
    }

    #[test]
    fn test_title_falls_back_to_identifier() {
        let entry = json!({"identificador": "X123"});
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        assert_eq!(record.title, "X123");
    }

    #[test]
    fn test_rejects_non_object_entries() {
        assert!(normalize_entry(&json!("obras en A Coruña"), Origin::Boe).is_none());
        assert!(normalize_entry(&json!(["a", "b"]), Origin::Boe).is_none());
        assert!(normalize_entry(&json!(null), Origin::Boe).is_none());
    }

    #[test]
    fn test_rejects_entry_without_identifier() {
        let entry = json!({"titulo": "Sin identificador"});
        assert!(normalize_entry(&entry, Origin::Boe).is_none());
    }

    #[test]
    fn test_control_number_variants() {
        let entry = json!({"identificador": "A", "numControl": "B0042"});
        let record = normalize_entry(&entry, Origin::Borme).unwrap();
        assert_eq!(record.control.as_deref(), Some("B0042"));

        let entry = json!({"identificador": "A", "numero_control": 42});
        let record = normalize_entry(&entry, Origin::Borme).unwrap();
        assert_eq!(record.control.as_deref(), Some("42"));
    }

    #[test]
    fn test_pdf_plain_string() {
        let entry = json!({"identificador": "A", "url_pdf": "http://x/doc.pdf"});
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        assert_eq!(
            record.pdf,
            Some(PdfInfo {
                text: Some("http://x/doc.pdf".to_string()),
                ..PdfInfo::default()
            })
        );
    }

    #[test]
    fn test_pdf_object_with_sizes() {
        let entry = json!({
            "identificador": "A",
            "url_pdf": {"url": "http://x/doc.pdf", "szBytes": 2048}
        });
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        let pdf = record.pdf.unwrap();
        assert_eq!(pdf.text.as_deref(), Some("http://x/doc.pdf"));
        assert_eq!(pdf.size_bytes, Some(2048));
    }

    #[test]
    fn test_pdf_attributes_block() {
        let entry = json!({
            "identificador": "A",
            "url_pdf": {
                "@attributes": {
                    "szBytes": "217088",
                    "szKBytes": "212",
                    "pagina_inicial": "3",
                    "pagina_final": "5"
                },
                "texto": "http://x/doc.pdf"
            }
        });
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        let pdf = record.pdf.unwrap();
        assert_eq!(pdf.text.as_deref(), Some("http://x/doc.pdf"));
        assert_eq!(pdf.size_bytes, Some(217088));
        assert_eq!(pdf.size_kbytes.as_deref(), Some("212"));
        assert_eq!(pdf.first_page.as_deref(), Some("3"));
        assert_eq!(pdf.last_page.as_deref(), Some("5"));
    }

    #[test]
    fn test_pdf_explicit_fields_win_over_attributes() {
        let entry = json!({
            "identificador": "A",
            "url_pdf": {
                "atributos": {"szBytes": 1024, "texto": "http://x/attr.pdf"},
                "szBytes": 4096
            }
        });
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        let pdf = record.pdf.unwrap();
        assert_eq!(pdf.size_bytes, Some(4096));
        // No explicit link field, so the attributes' texto is used.
        assert_eq!(pdf.text.as_deref(), Some("http://x/attr.pdf"));
    }

    #[test]
    fn test_pdf_double_underscore_text_key() {
        let entry = json!({
            "identificador": "A",
            "url_pdf": {"__text": "http://x/doc.pdf"}
        });
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        assert_eq!(record.pdf.unwrap().text.as_deref(), Some("http://x/doc.pdf"));
    }

    #[test]
    fn test_pdf_empty_object_collapses() {
        let entry = json!({"identificador": "A", "url_pdf": {"texto": "", "szBytes": null}});
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        assert!(record.pdf.is_none());
    }

    #[test]
    fn test_html_url_string_and_object_forms() {
        let entry = json!({"identificador": "A", "url_html": "http://x/doc.html"});
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        assert_eq!(record.html_url.as_deref(), Some("http://x/doc.html"));

        let entry = json!({"identificador": "A", "enlace": {"href": "http://x/doc.html"}});
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        assert_eq!(record.html_url.as_deref(), Some("http://x/doc.html"));
    }

    #[test]
    fn test_xml_url_variants() {
        let entry = json!({"identificador": "A", "xml": {"#text": "http://x/doc.xml"}});
        let record = normalize_entry(&entry, Origin::Boe).unwrap();
        assert_eq!(record.xml_url.as_deref(), Some("http://x/doc.xml"));
    }

    #[test]
    fn test_origin_tag_carried_through() {
        let entry = json!({"identificador": "A"});
        let record = normalize_entry(&entry, Origin::Borme).unwrap();
        assert_eq!(record.origin, Origin::Borme);
    }
}
