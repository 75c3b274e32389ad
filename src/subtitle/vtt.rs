//! WebVTT subtitle parsing.

use super::{parse_timing_line, SubtitleEvent};
use crate::error::{LektorError, Result};

/// Parse WebVTT content into cue events.
///
/// The file must begin with a `WEBVTT` header block. `NOTE`, `STYLE` and
/// `REGION` blocks are skipped; cue identifiers are accepted and discarded.
pub fn parse(content: &str) -> Result<Vec<SubtitleEvent>> {
    let content = content.trim_start_matches('\u{feff}').replace("\r\n", "\n");

    if !content.trim_start().starts_with("WEBVTT") {
        return Err(LektorError::Subtitle(
            "Missing WEBVTT header".to_string(),
        ));
    }

    let mut events = Vec::new();
    let mut blocks = content.split("\n\n").map(str::trim);

    // First block is the header, possibly with metadata lines below it
    blocks.next();

    for block in blocks {
        if block.is_empty()
            || block.starts_with("NOTE")
            || block.starts_with("STYLE")
            || block.starts_with("REGION")
        {
            continue;
        }

        let mut lines = block.lines().peekable();

        // Optional cue identifier: any first line without a timing arrow
        if let Some(first) = lines.peek() {
            if !first.contains("-->") {
                lines.next();
            }
        }

        let timing = match lines.next() {
            Some(line) if line.contains("-->") => line,
            _ => {
                return Err(LektorError::Subtitle(format!(
                    "Cue block missing timing line: {}",
                    block.lines().next().unwrap_or("")
                )))
            }
        };
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

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
WEBVTT

1
00:00:01.000 --> 00:00:04.000
Welcome to the lecture.

00:00:04.500 --> 00:00:08.000 align:start
This one is very important.

NOTE
This comment should be skipped.

intro-cue
00:00:08.000 --> 00:00:10.000
Named cues work too.
";

    #[test]
    fn test_parse_basic() {
        let events = parse(SAMPLE).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].text, "Welcome to the lecture.");
        assert_eq!(events[1].text, "This one is very important.");
        assert_eq!(events[1].start_seconds, 4.5);
        assert_eq!(events[2].text, "Named cues work too.");
    }

    #[test]
    fn test_missing_header() {
        let content = "1\n00:00:01.000 --> 00:00:02.000\nHello\n";
        assert!(parse(content).is_err());
    }

    #[test]
    fn test_header_with_metadata() {
        let content = "WEBVTT\nKind: captions\nLanguage: en\n\n\
                       00:01.000 --> 00:02.000\nShort timestamps.\n";
        let events = parse(content).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start_seconds, 1.0);
    }

    #[test]
    fn test_header_only() {
        assert!(parse("WEBVTT\n").unwrap().is_empty());
    }
}
