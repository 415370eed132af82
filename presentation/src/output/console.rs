//! Console rendering of the chat transcript.
//!
//! Assistant text goes through the response formatter before display so
//! lists, steps, and Q&A blocks read well in a terminal; raw mode skips the
//! reflow and prints exactly what the backend sent. User text is only ever
//! trimmed.

use colored::Colorize;
use recap_domain::{SummaryOptions, SummaryStyle, format_response};

/// Renders transcript turns and option menus for the console
pub struct TranscriptView {
    raw: bool,
}

impl TranscriptView {
    pub fn new(raw: bool) -> Self {
        Self { raw }
    }

    /// Toggle raw mode, returning the new state.
    pub fn toggle_raw(&mut self) -> bool {
        self.raw = !self.raw;
        self.raw
    }

    /// Render a user turn.
    pub fn render_user(&self, text: &str) -> String {
        format!("{} {}", "You:".bold(), format_response(text, true))
    }

    /// Render an assistant turn, reflowed unless raw mode is on.
    pub fn render_assistant(&self, text: &str) -> String {
        let body = if self.raw {
            text.trim().to_string()
        } else {
            format_response(text, false)
        };
        format!("{}\n{}", "Recap:".cyan().bold(), indent(&body, "  "))
    }

    /// Render the three summary options offered after a video is processed.
    pub fn render_options(&self, options: &SummaryOptions) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Summary options:".cyan().bold()));

        for (index, style) in SummaryStyle::ALL.into_iter().enumerate() {
            output.push_str(&format!(
                "\n{} {} ({})\n",
                format!("{}.", index + 1).yellow().bold(),
                style.label(),
                style
            ));
            let preview = if self.raw {
                options.get(style).trim().to_string()
            } else {
                format_response(options.get(style), false)
            };
            output.push_str(&indent(&preview, "   "));
            output.push('\n');
        }

        output
    }

    pub fn print_user(&self, text: &str) {
        println!("{}", self.render_user(text));
    }

    pub fn print_assistant(&self, text: &str) {
        println!("{}", self.render_assistant(text));
    }

    pub fn print_options(&self, options: &SummaryOptions) {
        println!("{}", self.render_options(options));
    }
}

/// Indent every line of a multi-line string
fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line status notices (the popups of a graphical client)
pub mod notice {
    use colored::Colorize;

    pub fn error(message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    pub fn success(message: &str) {
        println!("{} {}", "ok:".green().bold(), message);
    }

    pub fn info(message: &str) {
        println!("{} {}", "-".cyan(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TranscriptView {
        colored::control::set_override(false);
        TranscriptView::new(false)
    }

    #[test]
    fn test_user_turn_is_trimmed_not_reformatted() {
        let view = plain();
        let rendered = view.render_user("  - not a list, just me  ");
        assert_eq!(rendered, "You: - not a list, just me");
    }

    #[test]
    fn test_assistant_turn_is_reflowed_and_indented() {
        let view = plain();
        let rendered = view.render_assistant("Key Points:\n- fast\n- safe");
        assert!(rendered.starts_with("Recap:\n"));
        assert!(rendered.contains("  Key Points:"));
        assert!(rendered.contains("  - fast"));
    }

    #[test]
    fn test_raw_mode_skips_reflow() {
        colored::control::set_override(false);
        let view = TranscriptView::new(true);
        let rendered = view.render_assistant("  one  two. Three four.  ");
        // Trimmed, but sentence splitting and reflow skipped.
        assert!(rendered.contains("  one  two. Three four."));
    }

    #[test]
    fn test_toggle_raw() {
        let mut view = plain();
        assert!(view.toggle_raw());
        assert!(!view.toggle_raw());
    }

    #[test]
    fn test_options_menu_lists_all_styles() {
        let view = plain();
        let options = SummaryOptions {
            toc_timestamps: "00:00 Intro".into(),
            toc_timestamps_bullets: "00:00 Intro\n- setup".into(),
            toc_expanded: "00:00 Intro\n- a\n- b".into(),
        };
        let rendered = view.render_options(&options);
        assert!(rendered.contains("1."));
        assert!(rendered.contains("2."));
        assert!(rendered.contains("3."));
        assert!(rendered.contains("toc-timestamps"));
        assert!(rendered.contains("toc-expanded"));
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", "  "), "  a\n\n  b");
    }
}
