//! OpenAI client construction.

use async_openai::{config::OpenAIConfig, Client};

/// Create an OpenAI client from ambient configuration.
///
/// Credentials come from the `OPENAI_API_KEY` environment variable. No
/// request timeout is configured: a generation call waits as long as the
/// service takes.
pub fn create_client() -> Client<OpenAIConfig> {
    Client::with_config(OpenAIConfig::default())
}
