//! OpenAI-backed text generation.

use super::Generator;
use crate::error::{LektorError, Result};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Generator backed by the OpenAI chat completions API.
///
/// The instruction string is sent as the system message and the input text as
/// the user message. Credentials come from the `OPENAI_API_KEY` environment
/// variable.
pub struct OpenAIGenerator {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
}

impl OpenAIGenerator {
    /// Create a new generator for the given model.
    pub fn new(model: &str) -> Self {
        Self {
            client: create_client(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl Generator for OpenAIGenerator {
    #[instrument(skip(self, instructions, input), fields(model = %self.model, input_len = input.len()))]
    async fn generate(&self, instructions: &str, input: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(instructions.to_string())
                .build()
                .map_err(|e| LektorError::Generation(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(input.to_string())
                .build()
                .map_err(|e| LektorError::Generation(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()
            .map_err(|e| LektorError::Generation(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| LektorError::OpenAI(format!("Generation request failed: {}", e)))?;

        let text = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| LektorError::Generation("Empty response from model".to_string()))?
            .clone();

        debug!("Generated {} bytes", text.len());

        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
