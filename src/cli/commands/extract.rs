//! Extraction phase implementation.

use crate::cli::Output;
use crate::config::Prompts;
use crate::extract::Extractor;
use crate::generate::Generator;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Run the batch extraction phase.
///
/// Failures are reported per file after the whole batch has finished; any
/// failure makes the phase exit non-zero.
pub async fn run_extract(
    subtitles_dir: &Path,
    gems_dir: &Path,
    generator: Arc<dyn Generator>,
    prompts: &Prompts,
) -> Result<()> {
    Output::info(&format!(
        "Extracting notes from {} into {}",
        subtitles_dir.display(),
        gems_dir.display()
    ));

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    let extractor = Extractor::new(generator, &prompts.extract.instructions, gems_dir);
    let report = extractor.extract_dir(subtitles_dir, workers).await?;

    if report.completed == 0 && report.failures.is_empty() {
        Output::warning("No subtitle files found, nothing extracted");
        return Ok(());
    }

    Output::success(&format!("Extracted {} notes", report.completed));

    if !report.failures.is_empty() {
        Output::header(&format!("{} files failed", report.failures.len()));
        for failure in &report.failures {
            Output::list_item(&format!("{}: {}", failure.source.display(), failure.error));
        }
        return Err(anyhow::anyhow!(
            "{} of {} extraction tasks failed",
            report.failures.len(),
            report.completed + report.failures.len()
        ));
    }

    Ok(())
}
