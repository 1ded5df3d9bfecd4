//! First-paragraph page descriptions.

/// Maximum description length in characters, ellipsis included.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Describe a page by the first prose paragraph of its body.
///
/// Headings, blank lines, and code-fence markers are skipped until the
/// paragraph starts; any of them ends it. Lines are trimmed and joined with
/// single spaces. Over-long results are cut to 197 characters plus `...`.
/// Returns an empty string when the body has no paragraph at all.
pub fn first_paragraph(body: &str) -> String {
    let mut paragraph: Vec<&str> = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim();
        let is_break = trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("```");

        if is_break {
            if paragraph.is_empty() {
                continue;
            }
            break;
        }

        paragraph.push(trimmed);
    }

    truncate(paragraph.join(" "))
}

fn truncate(description: String) -> String {
    if description.chars().count() <= DESCRIPTION_MAX_CHARS {
        return description;
    }

    let keep = DESCRIPTION_MAX_CHARS - ELLIPSIS.len();
    let mut cut: String = description.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}
