//! Per-category line-break rewriting.
//!
//! Each pass is a line-oriented regex substitution over the whole block.
//! The passes only insert line breaks and indentation; the shared cleanup in
//! [`super::format_response`] normalizes whitespace afterwards, so every
//! category produces output with no 3+ newline runs and no stray padding.

use once_cell::sync::Lazy;
use regex::Regex;

// Heading and level markers that open a table-of-contents section.
static TOC_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^(#{1,3}|Level \d|Table of Contents|TOC|Basic TOC|Detailed TOC|Expanded|Summary)")
        .unwrap()
});
static STEP_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(Step \d|Steps to|How to|Instructions):").unwrap());
static KEY_POINTS_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(Key (?:Points|Tips|Takeaways)|Main Points):").unwrap());
static COMPARISON_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(Comparison|Versus|Differences between):").unwrap());

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\d+[.)][ \t]*)(.*)$").unwrap());
static INDENTED_NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]+\d+[.)][ \t]*)(.*)$").unwrap());
static BULLET_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([-•*][ \t]*)(.*)$").unwrap());
static ANY_BULLET_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*([-•*])[ \t]*([^-•*].*)$").unwrap());

static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?im)^(?:Q|Question):").unwrap());
static ANSWER_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?im)^(?:A|Answer):").unwrap());
static VERSUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)vs\.").unwrap());

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?])\s+([A-Z])").unwrap());

/// Blank line before each heading/level marker; bullets indented, numbered
/// entries left in place.
pub(super) fn table_of_contents(text: &str) -> String {
    let text = TOC_MARKER.replace_all(text, "\n\n$1");
    let text = BULLET_ITEM.replace_all(&text, "    $1$2");
    text.into_owned()
}

/// Blank line around the step header, each numbered step on its own line,
/// bullet sub-steps indented.
pub(super) fn step_by_step(text: &str) -> String {
    // Only the first header line — later "Step N:" lines are the steps
    // themselves and are handled by the numbered-item pass.
    let text = STEP_HEADER.replace(text, "\n$1:\n");
    let text = NUMBERED_ITEM.replace_all(&text, "\n$1 $2");
    let text = BULLET_ITEM.replace_all(&text, "    $1 $2");
    text.into_owned()
}

/// Line break after the section header, one bullet per line, nested bullets
/// pulled to a two-space indent. Shared by the key-points and plain
/// bullet-list categories.
pub(super) fn key_points(text: &str) -> String {
    let text = KEY_POINTS_HEADER.replace(text, "$1:\n");
    let text = BULLET_ITEM.replace_all(&text, "\n$1 $2");
    let text = ANY_BULLET_ITEM.replace_all(&text, "  $1 $2");
    text.into_owned()
}

/// One numbered item per line; indented sub-items pushed further right.
pub(super) fn numbered_list(text: &str) -> String {
    let text = NUMBERED_ITEM.replace_all(text, "\n$1 $2");
    let text = INDENTED_NUMBERED_ITEM.replace_all(&text, "    $1 $2");
    text.into_owned()
}

/// Line break after the header, one comparison point per line, and a break
/// after every "vs." so the two sides stack.
pub(super) fn comparison(text: &str) -> String {
    let text = COMPARISON_HEADER.replace(text, "$1:\n");
    let text = BULLET_ITEM.replace_all(&text, "\n$1 $2");
    let text = VERSUS.replace_all(&text, "vs.\n");
    text.into_owned()
}

/// Line break before every question and answer marker. Long-form markers
/// are normalized to `Q:` / `A:`.
pub(super) fn q_and_a(text: &str) -> String {
    let text = QUESTION_MARKER.replace_all(text, "\nQ:");
    let text = ANSWER_MARKER.replace_all(&text, "\nA:");
    text.into_owned()
}

/// Prose: rebuild paragraphs with single-space interiors, dropping empty
/// ones, joined by blank lines.
pub(super) fn general(text: &str) -> String {
    PARAGRAPH_BREAK
        .split(text)
        .map(|paragraph| WHITESPACE_RUN.replace_all(paragraph, " ").trim().to_string())
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Put each sentence of a prose block on its own line: break after terminal
/// punctuation followed by a capital letter.
pub(super) fn split_sentences(text: &str) -> String {
    SENTENCE_BOUNDARY.replace_all(text, "$1\n$2").into_owned()
}
