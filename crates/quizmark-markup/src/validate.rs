//! Structural validation of mixed-markup text.

use crate::tags::{TagKind, TagRegion, discover, merge_regions};

/// Check that the enabled tag regions of `text` do not overlap.
///
/// Regions of each enabled kind are discovered with the same scan the
/// formatter uses, merged into one start-ordered list, and walked pairwise:
/// any region reaching into the next one (cross-kind nesting, or the two
/// staggered regions a same-kind nesting produces) makes the text invalid.
/// Adjacent-pair comparison suffices because the merged list is start-ordered,
/// so every overlap shows up between some consecutive pair.
///
/// Structural invalidity is never an error: [`format`](crate::TextFormatter::format)
/// still produces output for text this function rejects, so callers run this
/// check first when they want to refuse such input instead of rendering it.
///
/// # Example
///
/// ```
/// use quizmark_markup::is_valid_text;
///
/// assert!(is_valid_text(true, true, "[latex]x[/latex][markdown]y[/markdown]"));
/// assert!(!is_valid_text(true, true, "[latex][markdown]y[/latex][/markdown]"));
/// ```
#[must_use]
pub fn is_valid_text(latex_enabled: bool, markdown_enabled: bool, text: &str) -> bool {
    let latex = if latex_enabled {
        discover(text, TagKind::Latex)
    } else {
        Vec::new()
    };
    let markdown = if markdown_enabled {
        discover(text, TagKind::Markdown)
    } else {
        Vec::new()
    };
    let merged = merge_regions(&latex, &markdown);

    merged
        .windows(2)
        .all(|pair| !partially_overlap(pair[0], pair[1]))
}

/// Whether `second` (the later start in merge order) overlaps `first`
/// without being span-identical to it.
fn partially_overlap(first: TagRegion, second: TagRegion) -> bool {
    let starts_inside = first.start < second.start && second.start < first.end;
    let ends_inside = second.start < first.end && second.end < first.end;
    starts_inside || ends_inside
}
