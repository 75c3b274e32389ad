//! Lektor - Lecture Note Extraction and Exam Synthesis
//!
//! A CLI tool that turns lecture subtitle files into exam-focused study notes
//! and practice exams, using an LLM for the heavy lifting.
//!
//! The name "Lektor" comes from the Norwegian/Danish word for "lecturer."
//!
//! # Overview
//!
//! Lektor allows you to:
//! - Extract exam-relevant content ("gems") from lecture subtitle files
//! - Process a whole directory of lectures in parallel
//! - Synthesize a practice exam from the accumulated notes
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Prompt templates and overrides
//! - `subtitle` - Subtitle file parsing (SRT, WebVTT)
//! - `generate` - Text-generation service abstraction
//! - `extract` - Per-lecture note extraction and the parallel batch runner
//! - `exam` - Practice exam synthesis from note documents
//!
//! # Example
//!
//! ```rust,no_run
//! use lektor::extract::Extractor;
//! use lektor::generate::OpenAIGenerator;
//! use lektor::config::Prompts;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let prompts = Prompts::default();
//!     let generator = Arc::new(OpenAIGenerator::new("o3-mini"));
//!
//!     let extractor = Extractor::new(generator, &prompts.extract.instructions, "./gems");
//!     let report = extractor.extract_dir(Path::new("./subtitles"), 4).await?;
//!     println!("Extracted {} notes", report.completed);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exam;
pub mod extract;
pub mod generate;
pub mod openai;
pub mod subtitle;

pub use error::{LektorError, Result};
