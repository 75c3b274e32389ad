//! SRT (SubRip) subtitle parsing.

use super::{parse_timing_line, SubtitleEvent};
use crate::error::{LektorError, Result};

/// Parse SRT content into cue events.
///
/// An SRT file is a sequence of blank-line-separated blocks:
///
/// ```text
/// 1
/// 00:00:01,000 --> 00:00:04,000
/// Cue text, possibly
/// spanning multiple lines.
/// ```
pub fn parse(content: &str) -> Result<Vec<SubtitleEvent>> {
    let content = content.trim_start_matches('\u{feff}').replace("\r\n", "\n");
    let mut events = Vec::new();

    for block in content.split("\n\n").map(str::trim) {
        if block.is_empty() {
            continue;
        }

        let mut lines = block.lines().peekable();

        // The cue index line is optional in practice
        if let Some(first) = lines.peek() {
            if first.trim().parse::<u64>().is_ok() {
                lines.next();
            }
        }

        let timing = lines
            .next()
            .ok_or_else(|| LektorError::Subtitle("Cue block missing timing line".to_string()))?;
        let (start_seconds, end_seconds) = parse_timing_line(timing)?;

        let text = lines.collect::<Vec<_>>().join("\n");

        events.push(SubtitleEvent {
            start_seconds,
            end_seconds,
            text,
        });
    }

    Ok(events)
}
