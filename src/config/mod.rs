//! Configuration for Lektor.

mod prompts;

pub use prompts::{ExamPrompts, ExtractPrompts, Prompts};
