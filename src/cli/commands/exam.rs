//! Exam synthesis phase implementation.

use crate::cli::Output;
use crate::config::Prompts;
use crate::exam::{self, ExamBuilder};
use crate::generate::Generator;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Run the exam synthesis phase.
///
/// The example exam file is read here, not at startup, so extraction-only
/// runs never depend on it.
pub async fn run_exam(
    gems_dir: &Path,
    generator: Arc<dyn Generator>,
    prompts: &Prompts,
) -> Result<()> {
    let instructions = exam::render_instructions(prompts, Path::new(exam::EXAMPLE_EXAM_PATH))?;

    let builder = ExamBuilder::new(generator, &instructions);

    let spinner = Output::spinner("Synthesizing exam...");
    match builder
        .synthesize(gems_dir, Path::new(exam::EXAM_OUTPUT_PATH))
        .await
    {
        Ok(output) => {
            spinner.finish_and_clear();
            Output::success(&format!("Exam written to {}", output.display()));
            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Exam synthesis failed: {}", e));
            Err(e.into())
        }
    }
}
