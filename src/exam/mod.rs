//! Practice exam synthesis from extracted note documents.
//!
//! Collects every `*.md` note in the gems directory, concatenates them into a
//! single prompt, and asks the generation service for exam-style questions in
//! one request. Notes are sorted by file name so the prompt is reproducible
//! across runs.

use crate::config::Prompts;
use crate::error::{LektorError, Result};
use crate::generate::Generator;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Example exam shown to the model as a style reference.
pub const EXAMPLE_EXAM_PATH: &str = "./exam1.md";

/// Output path for the synthesized exam, relative to the working directory.
pub const EXAM_OUTPUT_PATH: &str = "exam2.md";

/// A note document loaded from the gems directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Base filename without the `.md` extension.
    pub name: String,
    pub content: String,
}

/// Exam synthesizer.
pub struct ExamBuilder {
    generator: Arc<dyn Generator>,
    instructions: String,
}

impl ExamBuilder {
    /// Create an exam builder with fully rendered instructions.
    pub fn new(generator: Arc<dyn Generator>, instructions: &str) -> Self {
        Self {
            generator,
            instructions: instructions.to_string(),
        }
    }

    /// Synthesize a practice exam from the notes in `gems_dir` and write it
    /// to `output_path`, overwriting any prior exam.
    #[instrument(skip(self), fields(gems = %gems_dir.display()))]
    pub async fn synthesize(&self, gems_dir: &Path, output_path: &Path) -> Result<PathBuf> {
        let notes = collect_notes(gems_dir)?;
        info!("Synthesizing exam from {} notes with {}", notes.len(), self.generator.model());

        let prompt = build_prompt(&notes);
        debug!("Exam prompt is {} bytes", prompt.len());

        let exam = self.generator.generate(&self.instructions, &prompt).await?;

        tokio::fs::write(output_path, &exam).await?;
        Ok(output_path.to_path_buf())
    }
}

/// Render the exam instructions, reading the example exam file.
///
/// Called only when the exam phase actually runs, so a pure extraction run
/// never depends on the example exam being present.
pub fn render_instructions(prompts: &Prompts, example_path: &Path) -> Result<String> {
    let example = std::fs::read_to_string(example_path).map_err(|e| {
        LektorError::Config(format!(
            "Cannot read example exam {}: {}",
            example_path.display(),
            e
        ))
    })?;

    let mut vars = HashMap::new();
    vars.insert("example_exam".to_string(), example);

    Ok(Prompts::render(&prompts.exam.instructions, &vars))
}

/// Collect every `*.md` note document in the gems directory, sorted by name.
pub fn collect_notes(gems_dir: &Path) -> Result<Vec<Note>> {
    let mut notes = Vec::new();

    for entry in std::fs::read_dir(gems_dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let content = std::fs::read_to_string(&path)?;
        notes.push(Note { name, content });
    }

    notes.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(notes)
}

/// Concatenate notes into a single prompt, one heading per lecture.
pub fn build_prompt(notes: &[Note]) -> String {
    let mut prompt = String::new();
    for note in notes {
        prompt.push_str(&format!("# {}:\n\n{}\n\n", note.name, note.content));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Fake generator that records the prompt it was given.
    struct RecordingGenerator {
        seen: Mutex<Vec<String>>,
    }

    impl RecordingGenerator {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Generator for RecordingGenerator {
        async fn generate(&self, _instructions: &str, input: &str) -> Result<String> {
            self.seen.lock().unwrap().push(input.to_string());
            Ok("### Question 1\nDesign a page table.".to_string())
        }

        fn model(&self) -> &str {
            "recording"
        }
    }

    #[test]
    fn test_collect_notes_sorted_md_only() {
        let gems = tempfile::tempdir().unwrap();
        std::fs::write(gems.path().join("b.md"), "Y").unwrap();
        std::fs::write(gems.path().join("a.md"), "X").unwrap();
        std::fs::write(gems.path().join("stray.txt"), "ignored").unwrap();

        let notes = collect_notes(gems.path()).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].name, "a");
        assert_eq!(notes[0].content, "X");
        assert_eq!(notes[1].name, "b");
    }

    #[test]
    fn test_build_prompt() {
        let notes = vec![
            Note {
                name: "a".to_string(),
                content: "X".to_string(),
            },
            Note {
                name: "b".to_string(),
                content: "Y".to_string(),
            },
        ];
        assert_eq!(build_prompt(&notes), "# a:\n\nX\n\n# b:\n\nY\n\n");
    }

    #[test]
    fn test_render_instructions_missing_example() {
        let prompts = Prompts::default();
        let err = render_instructions(&prompts, Path::new("/nonexistent/exam1.md"));
        assert!(matches!(err, Err(LektorError::Config(_))));
    }

    #[test]
    fn test_render_instructions_embeds_example() {
        let dir = tempfile::tempdir().unwrap();
        let example = dir.path().join("exam1.md");
        std::fs::write(&example, "### Question 1\nSample.").unwrap();

        let prompts = Prompts::default();
        let rendered = render_instructions(&prompts, &example).unwrap();
        assert!(rendered.contains("### Question 1\nSample."));
        assert!(!rendered.contains("{{example_exam}}"));
    }

    #[tokio::test]
    async fn test_synthesize_single_combined_request() {
        let gems = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        std::fs::write(gems.path().join("a.md"), "X").unwrap();
        std::fs::write(gems.path().join("b.md"), "Y").unwrap();

        let generator = Arc::new(RecordingGenerator::new());
        let builder = ExamBuilder::new(generator.clone(), "write an exam");

        let output = out_dir.path().join("exam2.md");
        builder.synthesize(gems.path(), &output).await.unwrap();

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "exactly one combined request");
        assert!(seen[0].contains("X"));
        assert!(seen[0].contains("Y"));

        let exam = std::fs::read_to_string(&output).unwrap();
        assert_eq!(exam, "### Question 1\nDesign a page table.");
    }
}
