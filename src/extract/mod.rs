//! Per-lecture note extraction and the parallel batch runner.
//!
//! Each subtitle file is an independent unit of work: load, flatten to plain
//! text, send to the generation service, write the returned notes to
//! `<gems>/<stem>.md`. The batch runner fans these tasks out concurrently;
//! outputs are distinct paths keyed by the input filename, so tasks never
//! contend.

use crate::error::{LektorError, Result};
use crate::generate::Generator;
use crate::subtitle;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Note extractor for lecture subtitle files.
pub struct Extractor {
    generator: Arc<dyn Generator>,
    instructions: String,
    gems_dir: PathBuf,
}

/// A single failed extraction task.
#[derive(Debug)]
pub struct BatchFailure {
    pub source: PathBuf,
    pub error: LektorError,
}

/// Outcome of a batch extraction run.
///
/// Failures are isolated per task: one bad transcript never blocks the rest
/// of the batch. The caller decides whether any failure fails the run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub completed: usize,
    pub failures: Vec<BatchFailure>,
}

impl Extractor {
    /// Create a new extractor writing note documents into `gems_dir`.
    pub fn new(
        generator: Arc<dyn Generator>,
        instructions: &str,
        gems_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            generator,
            instructions: instructions.to_string(),
            gems_dir: gems_dir.into(),
        }
    }

    /// The note document path for a given subtitle file.
    ///
    /// The input's extension is replaced with `.md`.
    pub fn note_path(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "note".to_string());
        self.gems_dir.join(format!("{}.md", stem))
    }

    /// Extract notes from a single subtitle file.
    ///
    /// Writes the service's response verbatim to the note path, overwriting
    /// any prior note for the same lecture.
    #[instrument(skip(self), fields(source = %source.display()))]
    pub async fn extract_file(&self, source: &Path) -> Result<PathBuf> {
        let transcript = subtitle::load(source)?;
        let text = transcript.plain_text();
        debug!("Loaded transcript: {} cues, {} bytes", transcript.events.len(), text.len());

        let notes = self.generator.generate(&self.instructions, &text).await?;

        let note_path = self.note_path(source);
        tokio::fs::write(&note_path, &notes).await?;

        debug!("Wrote notes to {}", note_path.display());
        Ok(note_path)
    }

    /// Extract notes from every entry in a subtitles directory.
    ///
    /// Enumerates the directory non-recursively with no extension filter;
    /// entries that are not readable subtitle files fail as individual tasks.
    /// Up to `workers` tasks run concurrently; completion order is
    /// unspecified.
    #[instrument(skip(self), fields(dir = %subtitles_dir.display()))]
    pub async fn extract_dir(&self, subtitles_dir: &Path, workers: usize) -> Result<BatchReport> {
        let entries: Vec<PathBuf> = std::fs::read_dir(subtitles_dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .collect();

        if entries.is_empty() {
            info!("No subtitle files found in {}", subtitles_dir.display());
            return Ok(BatchReport::default());
        }

        tokio::fs::create_dir_all(&self.gems_dir).await?;

        let total = entries.len();
        info!("Extracting notes from {} files with {}", total, self.generator.model());

        let pb = Arc::new(ProgressBar::new(total as u64));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.green} Extract   [{bar:30.cyan/blue}] {pos}/{len}")
                .unwrap()
                .progress_chars("█▓░"),
        );

        let mut report = BatchReport::default();

        let mut tasks = stream::iter(entries.into_iter())
            .map(|source| async move {
                let result = self.extract_file(&source).await;
                (source, result)
            })
            .buffer_unordered(workers.max(1));

        while let Some((source, result)) = tasks.next().await {
            pb.inc(1);
            match result {
                Ok(_) => report.completed += 1,
                Err(error) => report.failures.push(BatchFailure { source, error }),
            }
        }

        pb.finish_and_clear();

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Fake generator that echoes its input with a prefix.
    struct EchoGenerator;

    #[async_trait]
    impl Generator for EchoGenerator {
        async fn generate(&self, _instructions: &str, input: &str) -> Result<String> {
            Ok(format!("NOTES:{}", input))
        }

        fn model(&self) -> &str {
            "echo"
        }
    }

    const SRT: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello world.\n";

    fn extractor(gems: &Path) -> Extractor {
        Extractor::new(Arc::new(EchoGenerator), "take notes", gems)
    }

    #[test]
    fn test_note_path_replaces_extension() {
        let ex = extractor(Path::new("/tmp/gems"));
        assert_eq!(
            ex.note_path(Path::new("/tmp/subs/lecture01.srt")),
            PathBuf::from("/tmp/gems/lecture01.md")
        );
        // Only the final extension is replaced
        assert_eq!(
            ex.note_path(Path::new("/tmp/subs/lecture01.en.srt")),
            PathBuf::from("/tmp/gems/lecture01.en.md")
        );
    }

    #[tokio::test]
    async fn test_extract_file_writes_note() {
        let subs = tempfile::tempdir().unwrap();
        let gems = tempfile::tempdir().unwrap();
        let source = subs.path().join("atomicity.srt");
        std::fs::write(&source, SRT).unwrap();

        let note = extractor(gems.path()).extract_file(&source).await.unwrap();

        assert_eq!(note, gems.path().join("atomicity.md"));
        let content = std::fs::read_to_string(&note).unwrap();
        assert_eq!(content, "NOTES:Hello world.");
    }

    #[tokio::test]
    async fn test_extract_dir_one_note_per_file() {
        let subs = tempfile::tempdir().unwrap();
        let gems = tempfile::tempdir().unwrap();
        std::fs::write(subs.path().join("a.srt"), SRT).unwrap();
        std::fs::write(subs.path().join("b.srt"), SRT).unwrap();

        let ex = extractor(gems.path());
        let report = ex.extract_dir(subs.path(), 4).await.unwrap();

        assert_eq!(report.completed, 2);
        assert!(report.failures.is_empty());
        assert!(gems.path().join("a.md").exists());
        assert!(gems.path().join("b.md").exists());

        // Re-running overwrites, no duplicates accumulate
        let report = ex.extract_dir(subs.path(), 4).await.unwrap();
        assert_eq!(report.completed, 2);
        assert_eq!(std::fs::read_dir(gems.path()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_extract_dir_empty() {
        let subs = tempfile::tempdir().unwrap();
        let gems = tempfile::tempdir().unwrap();

        let report = extractor(gems.path()).extract_dir(subs.path(), 4).await.unwrap();

        assert_eq!(report.completed, 0);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_bad_file_fails_alone() {
        let subs = tempfile::tempdir().unwrap();
        let gems = tempfile::tempdir().unwrap();
        std::fs::write(subs.path().join("good.srt"), SRT).unwrap();
        // Not valid UTF-8, fails at decode time
        std::fs::write(subs.path().join("bad.srt"), [0xff, 0xfe, 0x00, 0xff]).unwrap();

        let report = extractor(gems.path()).extract_dir(subs.path(), 4).await.unwrap();

        assert_eq!(report.completed, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].source.ends_with("bad.srt"));
        assert!(gems.path().join("good.md").exists());
        assert!(!gems.path().join("bad.md").exists());
    }
}
