//! Summary style value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the summary variants offered after a video is processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStyle {
    /// Table of contents with timestamps only
    TocTimestamps,
    /// Table of contents with two explanatory bullet points per entry
    TocTimestampsBullets,
    /// Table of contents with five bullet points per entry
    TocExpanded,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 3] = [
        SummaryStyle::TocTimestamps,
        SummaryStyle::TocTimestampsBullets,
        SummaryStyle::TocExpanded,
    ];

    /// Stable identifier used on the wire and in command arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::TocTimestamps => "toc-timestamps",
            SummaryStyle::TocTimestampsBullets => "toc-timestamps-bullets",
            SummaryStyle::TocExpanded => "toc-expanded",
        }
    }

    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            SummaryStyle::TocTimestamps => "A table of contents with timestamps",
            SummaryStyle::TocTimestampsBullets => {
                "A table of contents with 2 explanatory bullet points"
            }
            SummaryStyle::TocExpanded => "A table of contents with 5 bullet points",
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toc-timestamps" => Ok(SummaryStyle::TocTimestamps),
            "toc-timestamps-bullets" => Ok(SummaryStyle::TocTimestampsBullets),
            "toc-expanded" => Ok(SummaryStyle::TocExpanded),
            other => Err(DomainError::UnknownSummaryStyle(other.to_string())),
        }
    }
}

/// Preview text for each summary variant, as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub toc_timestamps: String,
    pub toc_timestamps_bullets: String,
    pub toc_expanded: String,
}

impl SummaryOptions {
    /// Preview text for one style.
    pub fn get(&self, style: SummaryStyle) -> &str {
        match style {
            SummaryStyle::TocTimestamps => &self.toc_timestamps,
            SummaryStyle::TocTimestampsBullets => &self.toc_timestamps_bullets,
            SummaryStyle::TocExpanded => &self.toc_expanded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_round_trip() {
        for style in SummaryStyle::ALL {
            assert_eq!(style.as_str().parse::<SummaryStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_unknown_style_is_an_error() {
        assert!(matches!(
            "toc-everything".parse::<SummaryStyle>(),
            Err(DomainError::UnknownSummaryStyle(_))
        ));
    }

    #[test]
    fn test_options_deserialize_from_wire_shape() {
        let json = r#"{
            "toc_timestamps": "00:00 Intro",
            "toc_timestamps_bullets": "00:00 Intro\n- setup",
            "toc_expanded": "00:00 Intro\n- a\n- b\n- c\n- d\n- e"
        }"#;
        let options: SummaryOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.get(SummaryStyle::TocTimestamps), "00:00 Intro");
        assert!(options.get(SummaryStyle::TocExpanded).contains("- e"));
    }
}
