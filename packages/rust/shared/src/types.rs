//! Core domain types for wiki pages.

use std::path::PathBuf;

/// Parsed frontmatter: an insertion-ordered YAML mapping.
pub type Metadata = serde_yaml::Mapping;

/// Page type used when the frontmatter does not declare one.
pub const DEFAULT_PAGE_TYPE: &str = "concept";

/// Page type that sorts ahead of everything else in the full dump.
pub const OVERVIEW_PAGE_TYPE: &str = "overview";

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A single markdown page collected from the wiki directory.
///
/// `content` is the untouched source text. Every other field is derived from
/// it at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Path relative to the wiki root, `/`-separated (e.g. `guides/setup.md`).
    pub path: String,
    /// Display title.
    pub title: String,
    /// Category tag controlling grouping in the index.
    pub page_type: String,
    /// Tags declared in the frontmatter, in order.
    pub tags: Vec<String>,
    /// First-paragraph summary, at most 200 characters. May be empty.
    pub description: String,
    /// Full original file text, frontmatter included.
    pub content: String,
    /// Every key/value pair from the frontmatter.
    pub metadata: Metadata,
}

impl Page {
    /// Whether this page belongs to the `overview` type.
    pub fn is_overview(&self) -> bool {
        self.page_type == OVERVIEW_PAGE_TYPE
    }
}

// ---------------------------------------------------------------------------
// SkippedFile
// ---------------------------------------------------------------------------

/// A markdown file the collector could not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Full path of the skipped file.
    pub path: PathBuf,
    /// Human-readable reason (the underlying I/O or decode error).
    pub reason: String,
}
