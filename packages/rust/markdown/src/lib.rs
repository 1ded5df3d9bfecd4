//! Markdown page parsing: frontmatter, descriptions, and display titles.
//!
//! Everything here is pure text processing. Reading files and deciding what
//! to do with a page belongs to `llmsgen-core`.

mod frontmatter;
mod summary;

pub use frontmatter::{
    Frontmatter, extract_frontmatter, metadata_list, metadata_text, parse_metadata,
    split_frontmatter,
};
pub use summary::{DESCRIPTION_MAX_CHARS, first_paragraph};

/// Title-case a string: the first letter of every alphabetic run is upper
/// case, the rest lower case.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }

    out
}

/// Display title for a page without a `title` field, from its file stem.
pub fn title_from_stem(stem: &str) -> String {
    title_case(&stem.replace('-', " "))
}
