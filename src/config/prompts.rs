//! Prompt templates for Lektor.
//!
//! Prompts can be customized by placing TOML files in a custom prompts
//! directory (`extract.toml`, `exam.toml`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Prompts {
    pub extract: ExtractPrompts,
    pub exam: ExamPrompts,
}

/// Prompts for per-lecture note extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractPrompts {
    /// Instruction string sent alongside each lecture transcript.
    pub instructions: String,
}

impl Default for ExtractPrompts {
    fn default() -> Self {
        Self {
            instructions: r#"Above is the transcript of a lecture. Follow the instructions below.

# Instructions from Professor

Review my lecture recordings, religiously. And please listen very actively and take notes. I structure lectures in such a way that an attentive listener will extract enough questions and hints about exam interlaced with the delivery of the main content.
1. e.g. for each such example covered in lecture, please make sure you can solve this example yourself. Copy the problem into your response, as well as my solution
2. Especially make sure to note down situations I do the following:
    - I frequently say things like : "if I were to ask you this on the exam". Make sure to include these
    - I often emphasize specific things as being very important or fundamental
    - I introduce concrete examples (like we did in the Atomicity 1 lecture, or the VMM lecture, considering 1-level page tables, etc)
3. Try to follow my line of thinking: how I conceptualize thing, how I give knowledge structure. I assert that everything can be derived from first principles.

# Your Task

Your task is to analyze the user's lecture transcript and find all these examples that could be possibly on the exam, according to the Professor's hints. Output a detailed list of wherever these examples occur in the lecture.

# Formatting

Report each occurrence in exactly the following format:

### [Number] [Title]
**Key Points**
- [Important or emphasized key points as bullet list]

(If there's an example:) **Problem statement:**
[Example problem]

(If there's an example:) **Solution:**
[Professor's solution and line of thinking]

_Summary of this item, any additional information, things you would like to add based on information given in the transcript._"#
                .to_string(),
        }
    }
}

/// Prompts for practice exam synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamPrompts {
    /// Instruction template for exam synthesis.
    ///
    /// Contains an `{{example_exam}}` placeholder which is filled in with the
    /// contents of the example exam file when the exam phase runs.
    pub instructions: String,
}

impl Default for ExamPrompts {
    fn default() -> Self {
        Self {
            instructions: r#"You will be given lecture analysis documents and you will need to synthesize an exam based on the details extracted from the lecture recordings.

Here is an example of an exam (do not copy the questions from here):
{{example_exam}}

Focus on writing design oriented questions like in the style of the above exam. Give us example scenarios and then ask us design questions about it. The questions must be somehow novel, not directly taken from the practice material or lecture notes. They need to be questions that force the students to reason about the material and think beyond what the lecture has given them considering tradeoffs.

# Formatting

Provide each exam-style question in exactly the following format:

### Question [#]
[Any conditions, setup, etc. of the question]

[Content of the question itself, and/or any followup/sub-questions.]"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the defaults, with optional custom directory overrides.
    pub fn load(custom_dir: Option<&str>) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            // Load extraction prompts if file exists
            let extract_path = custom_path.join("extract.toml");
            if extract_path.exists() {
                let content = std::fs::read_to_string(&extract_path)?;
                prompts.extract = toml::from_str(&content)?;
            }

            // Load exam prompts if file exists
            let exam_path = custom_path.join("exam.toml");
            if exam_path.exists() {
                let content = std::fs::read_to_string(&exam_path)?;
                prompts.exam = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }
}
