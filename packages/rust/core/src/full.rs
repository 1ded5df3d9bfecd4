//! Full-content dump (`llms-full.txt`) rendering.

use tracing::instrument;

use llmsgen_shared::Page;

use crate::index::{by_title, link_target};

const PAGE_RULE_WIDTH: usize = 80;
const FILE_RULE_WIDTH: usize = 40;

/// Pages in dump order: overview pages first, then everything else, each
/// tier sorted by title.
pub fn dump_order(pages: &[Page]) -> Vec<&Page> {
    let mut ordered: Vec<&Page> = pages.iter().collect();
    ordered.sort_by(|a, b| {
        (!a.is_overview())
            .cmp(&!b.is_overview())
            .then_with(|| by_title(a, b))
    });
    ordered
}

/// Render every page's raw content into one document.
#[instrument(skip_all, fields(repo = %repo_name, pages = pages.len()))]
pub fn render_full(pages: &[Page], repo_name: &str, link_prefix: &str) -> String {
    let page_rule = "=".repeat(PAGE_RULE_WIDTH);
    let file_rule = "-".repeat(FILE_RULE_WIDTH);

    let mut lines: Vec<String> = vec![
        format!("# {repo_name} Wiki - Complete Content"),
        String::new(),
        "This file contains the complete content of all wiki pages for AI context.".to_string(),
        String::new(),
        page_rule.clone(),
        String::new(),
    ];

    for page in dump_order(pages) {
        lines.push(format!("FILE: {}", link_target(link_prefix, &page.path)));
        lines.push(file_rule.clone());
        lines.push(page.content.clone());
        lines.push(String::new());
        lines.push(page_rule.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}
