//! Wiki page collector.
//!
//! Walks the wiki directory, reads every visible `.md` file, and turns each
//! into a [`Page`]. Unreadable files are skipped with a warning.

use std::path::Path;

use tracing::{debug, info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use llmsgen_markdown::{
    extract_frontmatter, first_paragraph, metadata_list, metadata_text, title_from_stem,
};
use llmsgen_shared::{DEFAULT_PAGE_TYPE, Page, SkippedFile};

/// Pages found by a scan, plus the files that could not be read.
#[derive(Debug, Default)]
pub struct CollectResult {
    /// Parsed pages in traversal order.
    pub pages: Vec<Page>,
    /// Markdown files that were skipped.
    pub skipped: Vec<SkippedFile>,
}

/// Collect every markdown page below `root`.
///
/// Entries are visited in file-name order. Anything with a dot-prefixed
/// segment below `root` is ignored.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn collect_pages(root: &Path) -> CollectResult {
    let mut result = CollectResult::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                warn!(path = %path.display(), error = %e, "could not read directory entry, skipping");
                result.skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if !is_file(&entry) || !is_markdown(entry.path()) {
            continue;
        }

        let path = entry.path();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read page, skipping");
                result.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let page = page_from_content(relative_path(root, path), content);
        debug!(path = %page.path, title = %page.title, page_type = %page.page_type, "collected page");
        result.pages.push(page);
    }

    info!(
        pages = result.pages.len(),
        skipped = result.skipped.len(),
        "wiki scan complete"
    );

    result
}

/// Build a page from its wiki-relative path and raw text.
pub fn page_from_content(path: String, content: String) -> Page {
    let (metadata, body) = extract_frontmatter(&content);

    let title = metadata_text(&metadata, "title").unwrap_or_else(|| {
        let stem = Path::new(&path)
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        title_from_stem(&stem)
    });
    let page_type =
        metadata_text(&metadata, "type").unwrap_or_else(|| DEFAULT_PAGE_TYPE.to_string());
    let tags = metadata_list(&metadata, "tags");
    let description = first_paragraph(body);

    Page {
        path,
        title,
        page_type,
        tags,
        description,
        content,
        metadata,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Regular files, plus symlinks that resolve to one.
fn is_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink() && std::fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// `/`-separated path of `path` relative to `root`.
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
