//! Text-generation service abstraction.

mod openai;

pub use openai::OpenAIGenerator;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for the external text-generation service.
///
/// A single synchronous request/response round trip: an instruction string
/// plus an input text in, generated text out. Implementations carry their own
/// model identifier and credentials.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate text from an instruction string and an input text.
    async fn generate(&self, instructions: &str, input: &str) -> Result<String>;

    /// The model identifier requests are sent with.
    fn model(&self) -> &str;
}
