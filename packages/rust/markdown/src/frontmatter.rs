//! YAML frontmatter splitting and parsing.
//!
//! A page carries frontmatter when its text starts with `---`. The text is
//! split on `---` into at most three parts: the empty lead-in, the YAML
//! block, and everything after it.

use serde_yaml::Value;

use llmsgen_shared::{LlmsGenError, Metadata, Result};

/// Frontmatter delimiter.
const DELIMITER: &str = "---";

/// Outcome of looking for a frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontmatter<'a> {
    /// No usable header; the whole text is body.
    Absent,
    /// A header was found.
    Present {
        /// Raw YAML between the first two delimiters.
        yaml: &'a str,
        /// Text after the second delimiter, trimmed.
        body: &'a str,
    },
}

/// Locate the frontmatter block without parsing it.
pub fn split_frontmatter(content: &str) -> Frontmatter<'_> {
    if !content.starts_with(DELIMITER) {
        return Frontmatter::Absent;
    }

    let mut parts = content.splitn(3, DELIMITER);
    let _lead_in = parts.next();

    match (parts.next(), parts.next()) {
        (Some(yaml), Some(body)) => Frontmatter::Present {
            yaml,
            body: body.trim(),
        },
        _ => Frontmatter::Absent,
    }
}

/// Parse a YAML block into a mapping. An empty or `null` document is an empty
/// mapping; any other non-mapping document is an error.
pub fn parse_metadata(yaml: &str) -> Result<Metadata> {
    if yaml.trim().is_empty() {
        return Ok(Metadata::new());
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Metadata::new()),
        Ok(other) => Err(LlmsGenError::parse(format!(
            "frontmatter must be a mapping, found {}",
            value_kind(&other)
        ))),
        Err(e) => Err(LlmsGenError::parse(format!("invalid frontmatter YAML: {e}"))),
    }
}

/// Split and parse in one step, substituting an empty mapping when the header
/// is malformed. Returns the metadata and the body text.
pub fn extract_frontmatter(content: &str) -> (Metadata, &str) {
    match split_frontmatter(content) {
        Frontmatter::Absent => (Metadata::new(), content),
        Frontmatter::Present { yaml, body } => match parse_metadata(yaml) {
            Ok(metadata) => (metadata, body),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed frontmatter");
                (Metadata::new(), body)
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Value coercion
// ---------------------------------------------------------------------------

/// Text form of a scalar metadata value (string, number, or bool).
pub fn metadata_text(metadata: &Metadata, key: &str) -> Option<String> {
    metadata.get(key).and_then(scalar_text)
}

/// A sequence-valued metadata entry as strings. Non-scalar elements are
/// dropped; a missing or non-sequence value is an empty list.
pub fn metadata_list(metadata: &Metadata, key: &str) -> Vec<String> {
    match metadata.get(key) {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
