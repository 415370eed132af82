//! Heuristic response formatter.
//!
//! Classifies a block of assistant text into a structural [`ContentType`]
//! and reflows its line breaks for readable rendering. The transform is
//! pure and total: any input (including the empty string) produces a
//! deterministic output, nothing is ever rejected, and no state is kept
//! between calls. Rendering and escaping are the caller's concern — this
//! module never sanitizes.

mod content_type;
mod reflow;

pub use content_type::{ContentType, classify};

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());
static LEADING_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]+").unwrap());
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Reflow a response for display.
///
/// User-authored text is returned trimmed but otherwise untouched; assistant
/// text is classified and rewritten according to its [`ContentType`].
pub fn format_response(text: &str, is_user_message: bool) -> String {
    if is_user_message {
        return text.trim().to_string();
    }

    let content_type = classify(text);

    let reflowed = match content_type {
        ContentType::TableOfContents => reflow::table_of_contents(text),
        ContentType::StepByStep => reflow::step_by_step(text),
        // Key points and plain bullet lists share the same rewrite.
        ContentType::KeyPoints | ContentType::BulletList => reflow::key_points(text),
        ContentType::NumberedList => reflow::numbered_list(text),
        ContentType::Comparison => reflow::comparison(text),
        ContentType::QAndA => reflow::q_and_a(text),
        ContentType::General => reflow::general(text),
    };

    let cleaned = cleanup(&reflowed);

    // Prose additionally gets one sentence per line.
    if content_type == ContentType::General {
        cleanup(&reflow::split_sentences(&cleaned))
    } else {
        cleaned
    }
}

/// Shared final pass: per-line whitespace stripping, newline-run collapsing,
/// and an overall trim. Idempotent — a second application is a no-op.
fn cleanup(text: &str) -> String {
    let text = TRAILING_SPACE.replace_all(text, "");
    let text = LEADING_SPACE.replace_all(&text, "");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_passthrough() {
        assert_eq!(format_response("  Hello there.  ", true), "Hello there.");
        assert_eq!(format_response("Hello there.", true), "Hello there.");
        // Even text that would otherwise be reformatted.
        assert_eq!(
            format_response("- item one\n- item two", true),
            "- item one\n- item two"
        );
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(format_response("", false), "");
        assert_eq!(format_response("   \n\n  ", false), "");
    }

    #[test]
    fn test_steps_each_on_own_line() {
        let out = format_response("Step 1: Open the app\nStep 2: Click start", false);
        let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        assert!(lines.iter().any(|l| l.starts_with("Step 1:")));
        assert!(lines.iter().any(|l| l.starts_with("Step 2:")));
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn test_bullet_list_items_on_own_lines() {
        let out = format_response("- item one\n- item two", false);
        assert!(!out.starts_with('\n'));
        assert!(!out.ends_with('\n'));
        let items: Vec<&str> = out.lines().filter(|l| l.starts_with('-')).collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].contains("item one"));
        assert!(items[1].contains("item two"));
    }

    #[test]
    fn test_priority_step_over_bullets() {
        let text = "Step 1: Install\n- download\n- run";
        assert_eq!(classify(text), ContentType::StepByStep);
        let out = format_response(text, false);
        // Bullet sub-steps survive as bullets under the step.
        assert!(out.lines().any(|l| l.starts_with('-') && l.contains("download")));
    }

    #[test]
    fn test_lone_question_is_not_q_and_a() {
        assert_eq!(classify("Q: why though?"), ContentType::General);
        let out = format_response("Q: why though?", false);
        assert_eq!(out, "Q: why though?");
    }

    #[test]
    fn test_q_and_a_markers_get_line_breaks() {
        let out = format_response("Q: why? A: because. Question: when? Answer: now.", false);
        // Anchored at line starts, only the leading Q: is a marker here.
        assert!(out.starts_with("Q:"));

        let out = format_response("Q: why?\nA: because.\nQuestion: when?\nAnswer: now.", false);
        assert!(out.contains("Q: why?"));
        assert!(out.contains("A: because."));
        assert!(out.contains("Q: when?"));
        assert!(out.contains("A: now."));
        assert!(!out.contains("Question:"));
    }

    #[test]
    fn test_general_prose_splits_sentences() {
        let out = format_response("This is one. This is two. and this continues", false);
        assert_eq!(out, "This is one.\nThis is two. and this continues");
    }

    #[test]
    fn test_general_prose_rejoins_paragraphs() {
        let out = format_response("alpha\nbeta\n\n\n\ngamma   delta", false);
        assert_eq!(out, "alpha beta\n\ngamma delta");
    }

    #[test]
    fn test_no_triple_newlines_survive() {
        let inputs = [
            "Table of Contents:\n\n\n\nLevel 1 Intro\n\n\nLevel 2 Deep",
            "Step 1: A\n\n\n\nStep 2: B",
            "Key Points:\n\n\n- one\n\n\n\n- two",
            "1. one\n\n\n\n2. two",
            "Q: x?\n\n\n\nA: y.",
        ];
        for input in inputs {
            let out = format_response(input, false);
            assert!(!out.contains("\n\n\n"), "3+ newlines in output of {input:?}");
        }
    }

    #[test]
    fn test_cleanup_converges_on_own_output() {
        let once = format_response("Key Points:\n- a\n- b", false);
        assert_eq!(super::cleanup(&once), once);
    }

    #[test]
    fn test_toc_blank_line_before_levels() {
        let out = format_response("Table of Contents:\nLevel 1 Basics\nLevel 2 Advanced", false);
        assert!(out.contains("Basics\n\nLevel 2"));
    }

    #[test]
    fn test_comparison_stacks_versus() {
        let out = format_response("Comparison:\nspeed vs. safety", false);
        assert!(out.contains("vs.\nsafety"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let text = "Key Points:\n- alpha\n- beta";
        assert_eq!(format_response(text, false), format_response(text, false));
    }
}
