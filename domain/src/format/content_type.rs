//! Structural classification of response text.
//!
//! A block of assistant text is assigned exactly one [`ContentType`] by
//! testing an **ordered** list of detectors against it, top to bottom. The
//! first detector that fires wins; order is part of the contract (a text
//! containing both a step header and bullet lines is step-by-step, not a
//! bullet list). All detectors match case-insensitively at line starts.

use once_cell::sync::Lazy;
use regex::Regex;

/// Structural category of a block of response text.
///
/// Derived purely from the text itself; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// A table of contents, or level/heading-marker structure.
    TableOfContents,
    /// Numbered instructions under a step/how-to header.
    StepByStep,
    /// A "Key Points:" / "Main Points:" style list.
    KeyPoints,
    /// A "Comparison:" / "Versus:" breakdown.
    Comparison,
    /// Question/answer pairs (requires both `Q:` and `A:` markers).
    QAndA,
    /// Lines starting with `-`, `•`, or `*`.
    BulletList,
    /// Lines starting with `1.` / `1)` style numbering.
    NumberedList,
    /// Anything else: plain prose paragraphs.
    General,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::TableOfContents => "table-of-contents",
            ContentType::StepByStep => "step-by-step",
            ContentType::KeyPoints => "key-points",
            ContentType::Comparison => "comparison",
            ContentType::QAndA => "q-and-a",
            ContentType::BulletList => "bullet-list",
            ContentType::NumberedList => "numbered-list",
            ContentType::General => "general",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static TOC_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(Table of Contents|TOC):").unwrap());
static LEVEL_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(Level \d|Basic TOC|Detailed TOC|Expanded|Summary)").unwrap());
static STEP_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(Step \d|Steps to|How to|Instructions):").unwrap());
static KEY_POINTS_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(Key (Points|Tips|Takeaways)|Main Points):").unwrap());
static COMPARISON_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(Comparison|Versus|Differences between):").unwrap());
static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?im)^(Q|Question):").unwrap());
static ANSWER_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?im)^(A|Answer):").unwrap());
static BULLET_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-•*]").unwrap());
static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+[.)]").unwrap());

fn is_table_of_contents(text: &str) -> bool {
    TOC_HEADER.is_match(text) || LEVEL_HEADER.is_match(text)
}

fn is_step_by_step(text: &str) -> bool {
    STEP_HEADER.is_match(text)
}

fn is_key_points(text: &str) -> bool {
    KEY_POINTS_HEADER.is_match(text)
}

fn is_comparison(text: &str) -> bool {
    COMPARISON_HEADER.is_match(text)
}

// Q&A needs both sides; a lone question falls through to the list detectors.
fn is_q_and_a(text: &str) -> bool {
    QUESTION_MARKER.is_match(text) && ANSWER_MARKER.is_match(text)
}

fn is_bullet_list(text: &str) -> bool {
    BULLET_LINE.is_match(text)
}

fn is_numbered_list(text: &str) -> bool {
    NUMBERED_LINE.is_match(text)
}

type Detector = fn(&str) -> bool;

/// Ordered (predicate, category) pairs. Evaluation order is the tie-break.
const DETECTORS: &[(Detector, ContentType)] = &[
    (is_table_of_contents, ContentType::TableOfContents),
    (is_step_by_step, ContentType::StepByStep),
    (is_key_points, ContentType::KeyPoints),
    (is_comparison, ContentType::Comparison),
    (is_q_and_a, ContentType::QAndA),
    (is_bullet_list, ContentType::BulletList),
    (is_numbered_list, ContentType::NumberedList),
];

/// Classify a block of text into exactly one [`ContentType`].
pub fn classify(text: &str) -> ContentType {
    for (detector, content_type) in DETECTORS {
        if detector(text) {
            return *content_type;
        }
    }
    ContentType::General
}
