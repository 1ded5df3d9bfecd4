//! Index document (`llms.txt`) rendering.
//!
//! Pages are grouped by type. The four known types come first in a fixed
//! order, then any other types in the order they were first seen.

use std::cmp::Ordering;

use tracing::{debug, instrument};

use llmsgen_markdown::title_case;
use llmsgen_shared::Page;

/// Shown in place of an empty page description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Known page types and their section labels, in output order.
const TYPE_SECTIONS: [(&str, &str); 4] = [
    ("overview", "Overview"),
    ("concept", "Concepts"),
    ("guide", "Guides"),
    ("reference", "Reference"),
];

const BLURB: &str = "> Agent-maintained documentation for understanding this codebase.";

const QUICK_START: &str = "This wiki is designed for AI agents working with this codebase. \
Start with the overview page for a high-level understanding, then explore specific concepts as needed.";

/// Pages of one type, in collection order.
#[derive(Debug, Clone)]
pub struct TypeGroup<'a> {
    pub page_type: &'a str,
    pub pages: Vec<&'a Page>,
}

/// A rendered index section: label plus its pages sorted by title.
#[derive(Debug, Clone)]
pub struct IndexSection<'a> {
    pub label: String,
    pub pages: Vec<&'a Page>,
}

/// Group pages by `page_type`, keeping first-seen order of the types.
pub fn group_by_type(pages: &[Page]) -> Vec<TypeGroup<'_>> {
    let mut groups: Vec<TypeGroup<'_>> = Vec::new();

    for page in pages {
        match groups.iter_mut().find(|g| g.page_type == page.page_type) {
            Some(group) => group.pages.push(page),
            None => groups.push(TypeGroup {
                page_type: &page.page_type,
                pages: vec![page],
            }),
        }
    }

    groups
}

/// Order the groups into index sections: known types first, the rest after.
pub fn index_sections(pages: &[Page]) -> Vec<IndexSection<'_>> {
    let mut groups = group_by_type(pages);
    let mut sections = Vec::with_capacity(groups.len());

    for (page_type, label) in TYPE_SECTIONS {
        if let Some(pos) = groups.iter().position(|g| g.page_type == page_type) {
            let group = groups.remove(pos);
            sections.push(section(label.to_string(), group.pages));
        }
    }

    for group in groups {
        sections.push(section(title_case(group.page_type), group.pages));
    }

    sections
}

/// Render the full index document.
#[instrument(skip_all, fields(repo = %repo_name, pages = pages.len()))]
pub fn render_index(pages: &[Page], repo_name: &str, link_prefix: &str) -> String {
    let mut lines: Vec<String> = vec![
        format!("# {repo_name} Wiki"),
        String::new(),
        BLURB.to_string(),
        String::new(),
        "## Quick Start".to_string(),
        String::new(),
        QUICK_START.to_string(),
        String::new(),
    ];

    let sections = index_sections(pages);
    debug!(sections = sections.len(), "rendering index sections");

    for section in &sections {
        lines.push(format!("## {}", section.label));
        lines.push(String::new());
        lines.extend(section.pages.iter().map(|page| link_line(page, link_prefix)));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// One `- [title](link): description` entry.
pub fn link_line(page: &Page, link_prefix: &str) -> String {
    let description = if page.description.is_empty() {
        NO_DESCRIPTION
    } else {
        page.description.as_str()
    };
    format!(
        "- [{}]({}): {description}",
        page.title,
        link_target(link_prefix, &page.path)
    )
}

/// Link for a page path, e.g. `wiki/guides/setup.md`.
pub fn link_target(link_prefix: &str, path: &str) -> String {
    format!("{link_prefix}{path}")
}

/// Title order with the path as tie-breaker.
pub(crate) fn by_title(a: &Page, b: &Page) -> Ordering {
    a.title.cmp(&b.title).then_with(|| a.path.cmp(&b.path))
}

fn section(label: String, mut pages: Vec<&Page>) -> IndexSection<'_> {
    pages.sort_by(|a, b| by_title(a, b));
    IndexSection { label, pages }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
