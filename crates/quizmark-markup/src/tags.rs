//! Tag region discovery for `[latex]` and `[markdown]` markup.
//!
//! Scans author text and produces immutable [`TagRegion`] lists up front,
//! decoupling "where are the tags" from the validation and formatting
//! decisions made downstream.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static LATEX_OPENING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[latex\]").unwrap());
static LATEX_CLOSING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/latex\]").unwrap());
static MARKDOWN_OPENING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[markdown\]").unwrap());
static MARKDOWN_CLOSING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/markdown\]").unwrap());

/// Markup kind of a tag region.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TagKind {
    /// `[latex]...[/latex]` math region.
    Latex,
    /// `[markdown]...[/markdown]` rich-text region.
    Markdown,
}

impl TagKind {
    /// Opening delimiter for this kind.
    #[must_use]
    pub const fn opening(self) -> &'static str {
        match self {
            Self::Latex => "[latex]",
            Self::Markdown => "[markdown]",
        }
    }

    /// Closing delimiter for this kind.
    #[must_use]
    pub const fn closing(self) -> &'static str {
        match self {
            Self::Latex => "[/latex]",
            Self::Markdown => "[/markdown]",
        }
    }

    fn patterns(self) -> (&'static Regex, &'static Regex) {
        match self {
            Self::Latex => (&LATEX_OPENING, &LATEX_CLOSING),
            Self::Markdown => (&MARKDOWN_OPENING, &MARKDOWN_CLOSING),
        }
    }
}

/// A `[kind]...[/kind]` span discovered in source text.
///
/// Offsets are half-open byte positions into the scanned text: `start` is
/// the index of the opening delimiter, `end` the index immediately after
/// the closing delimiter. Regions are produced fresh on every scan and are
/// never persisted or mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagRegion {
    /// Markup kind of the region.
    pub kind: TagKind,
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset immediately after the closing delimiter.
    pub end: usize,
}

impl TagRegion {
    /// Text between the delimiters.
    ///
    /// `text` must be the string the region was discovered in.
    #[must_use]
    pub fn inner<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start + self.kind.opening().len()..self.end - self.kind.closing().len()]
    }
}

/// Discover all regions of `kind` in `text`, ordered by start offset.
///
/// The match is lazy and non-nesting: every opening delimiter pairs with
/// the first closing delimiter that begins at or after it, and an opening
/// with no following closing produces no region. Nested same-kind input
/// therefore yields two regions sharing one closing delimiter; the
/// validator rejects that shape as overlapping. Mismatched delimiters
/// (`[latex]...[/markdown]`) never form a region.
///
/// # Example
///
/// ```
/// use quizmark_markup::{TagKind, discover};
///
/// let regions = discover("see [latex]x^2[/latex] here", TagKind::Latex);
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].inner("see [latex]x^2[/latex] here"), "x^2");
/// ```
#[must_use]
pub fn discover(text: &str, kind: TagKind) -> Vec<TagRegion> {
    let (opening, closing) = kind.patterns();
    let closings: Vec<(usize, usize)> = closing
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut regions = Vec::new();
    let mut next = 0;
    for open in opening.find_iter(text) {
        while next < closings.len() && closings[next].0 < open.end() {
            next += 1;
        }
        let Some(&(_, close_end)) = closings.get(next) else {
            // No closing left; later openings start even further right.
            break;
        };
        regions.push(TagRegion {
            kind,
            start: open.start(),
            end: close_end,
        });
    }
    regions
}

/// Merge two start-ordered region lists into one, keeping the merge stable
/// (classic two-pointer merge; the left list wins ties).
#[must_use]
pub(crate) fn merge_regions(left: &[TagRegion], right: &[TagRegion]) -> Vec<TagRegion> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i].start <= right[j].start {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
