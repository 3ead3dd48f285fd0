//! Request body encoding.

use serde::Serialize;

use crate::{Result, WebsError};

/// MIME type for JSON bodies.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// MIME type for XML bodies.
pub const CONTENT_TYPE_XML: &str = "application/xml";

const CONTENT_TYPE_TEXT_XML: &str = "text/xml";

/// Serialization format selected from a `Content-Type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// `serde_json` encoding.
    Json,
    /// `quick-xml` encoding.
    Xml,
}

impl BodyFormat {
    /// Pick the format for a content type. Empty and unknown types fall back to JSON.
    pub fn from_content_type(content_type: &str) -> Self {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            CONTENT_TYPE_XML | CONTENT_TYPE_TEXT_XML => Self::Xml,
            _ => Self::Json,
        }
    }
}

/// Encode `body` for the given content type.
///
/// Returns `Ok(None)` when there is no body. Serialization failures are
/// reported as [`WebsError::Encode`].
pub fn encode_body<T>(content_type: &str, body: Option<&T>) -> Result<Option<Vec<u8>>>
where
    T: Serialize + ?Sized,
{
    let Some(body) = body else {
        return Ok(None);
    };

    let bytes = match BodyFormat::from_content_type(content_type) {
        BodyFormat::Json => {
            serde_json::to_vec(body).map_err(|e| WebsError::Encode(e.to_string()))?
        }
        BodyFormat::Xml => encode_xml(body)?.into_bytes(),
    };

    Ok(Some(bytes))
}

/// Structs and enums are rooted at their serde name. Sequences, tuples and
/// primitives have none, so they get an element name derived from the type.
fn encode_xml<T>(body: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    if let Ok(xml) = quick_xml::se::to_string(body) {
        return Ok(xml);
    }

    let root = element_name(std::any::type_name::<T>());
    quick_xml::se::to_string_with_root(&root, body).map_err(|e| WebsError::Encode(e.to_string()))
}

// Containers whose XML element name comes from the contained type.
const TRANSPARENT_WRAPPERS: &[&str] = &["Vec", "VecDeque", "Option", "Box", "Rc", "Arc", "Cow"];

/// XML element name for a Rust type name: `String` and `str` become
/// `string`, tuples become `tuple`, sequences and smart pointers use their
/// element type, anything else uses the last path segment without generics.
fn element_name(type_name: &str) -> String {
    let mut name = type_name.trim();
    while let Some(rest) = name.strip_prefix('&').or_else(|| name.strip_prefix("mut ")) {
        name = rest.trim_start();
    }

    if name.starts_with('(') {
        return "tuple".to_string();
    }

    if let Some(inner) = name.strip_prefix('[').and_then(|n| n.strip_suffix(']')) {
        let element = match inner.rsplit_once(';') {
            Some((element, len)) if len.trim().bytes().all(|b| b.is_ascii_digit()) => element,
            _ => inner,
        };
        return element_name(element);
    }

    if let Some((outer, args)) = name.split_once('<') {
        let outer = last_segment(outer);
        if TRANSPARENT_WRAPPERS.contains(&outer) {
            let args = args.strip_suffix('>').unwrap_or(args);
            // Cow<'a, str> style arguments carry a lifetime first.
            let args = match args.split_once(", ") {
                Some((first, rest)) if first.starts_with('\'') => rest,
                _ => args,
            };
            return element_name(args);
        }
        return outer.to_string();
    }

    match last_segment(name) {
        "String" | "str" => "string".to_string(),
        other => other.to_string(),
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
