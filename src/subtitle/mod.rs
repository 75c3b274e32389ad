//! Subtitle file parsing (SRT, WebVTT).
//!
//! Lektor only needs the spoken text of a lecture, so cue timings are parsed
//! but discarded by the extraction path.

mod srt;
mod vtt;

use crate::error::{LektorError, Result};
use std::path::Path;

/// A single subtitle cue.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEvent {
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub text: String,
}

/// A parsed subtitle file.
#[derive(Debug, Clone)]
pub struct Subtitle {
    pub events: Vec<SubtitleEvent>,
}

impl Subtitle {
    /// Concatenate every cue's text, newline-joined, in original order.
    pub fn plain_text(&self) -> String {
        self.events
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Supported subtitle formats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubtitleFormat {
    Srt,
    Vtt,
}

impl std::str::FromStr for SubtitleFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(SubtitleFormat::Srt),
            "vtt" | "webvtt" => Ok(SubtitleFormat::Vtt),
            _ => Err(format!("Unknown subtitle format: {}. Use srt or vtt.", s)),
        }
    }
}

/// Load and parse a subtitle file.
///
/// The format is chosen by file extension, falling back to content sniffing
/// for files without a recognized extension. The file must be valid UTF-8.
pub fn load(path: &Path) -> Result<Subtitle> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path, &content)?;
    parse(&content, format)
}

/// Parse subtitle content in the given format.
pub fn parse(content: &str, format: SubtitleFormat) -> Result<Subtitle> {
    let events = match format {
        SubtitleFormat::Srt => srt::parse(content)?,
        SubtitleFormat::Vtt => vtt::parse(content)?,
    };
    Ok(Subtitle { events })
}

/// Determine the subtitle format from the file extension or the content itself.
fn detect_format(path: &Path, content: &str) -> Result<SubtitleFormat> {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if let Ok(format) = ext.parse::<SubtitleFormat>() {
            return Ok(format);
        }
    }

    // No recognized extension: sniff the content
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();
    if trimmed.starts_with("WEBVTT") {
        return Ok(SubtitleFormat::Vtt);
    }
    if looks_like_srt(trimmed) {
        return Ok(SubtitleFormat::Srt);
    }

    Err(LektorError::Subtitle(format!(
        "Unsupported subtitle format: {}",
        path.display()
    )))
}

/// SRT files open with a numeric cue index followed by a timing arrow line.
fn looks_like_srt(content: &str) -> bool {
    let mut lines = content.lines();
    match (lines.next(), lines.next()) {
        (Some(first), Some(second)) => {
            first.trim().parse::<u64>().is_ok() && second.contains("-->")
        }
        _ => false,
    }
}

/// Parse a subtitle timestamp into seconds.
///
/// Accepts `HH:MM:SS,mmm` (SRT) and `[HH:]MM:SS.mmm` (WebVTT).
pub(crate) fn parse_timestamp(s: &str) -> Result<f64> {
    let s = s.trim();
    let normalized = s.replace(',', ".");
    let parts: Vec<&str> = normalized.split(':').collect();

    let invalid = || LektorError::Subtitle(format!("Invalid timestamp: {}", s));

    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, sec] => (
            h.parse::<u64>().map_err(|_| invalid())?,
            m.parse::<u64>().map_err(|_| invalid())?,
            sec.parse::<f64>().map_err(|_| invalid())?,
        ),
        [m, sec] => (
            0,
            m.parse::<u64>().map_err(|_| invalid())?,
            sec.parse::<f64>().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };

    if !(0.0..60.0).contains(&seconds) || minutes >= 60 {
        return Err(invalid());
    }

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds)
}

/// Split a timing line (`start --> end`) into its two timestamps.
pub(crate) fn parse_timing_line(line: &str) -> Result<(f64, f64)> {
    let (start, rest) = line.split_once("-->").ok_or_else(|| {
        LektorError::Subtitle(format!("Expected a timing line, got: {}", line))
    })?;

    // VTT timing lines may carry cue settings after the end timestamp
    let end = rest.trim().split_whitespace().next().ok_or_else(|| {
        LektorError::Subtitle(format!("Missing end timestamp: {}", line))
    })?;

    Ok((parse_timestamp(start)?, parse_timestamp(end)?))
}
