//! Pre-flight checks before expensive operations.
//!
//! Both phases spend real money on API calls, so the credential check runs
//! before any work starts instead of failing mid-batch.

use crate::error::{LektorError, Result};

/// Run pre-flight checks before any phase that calls the generation service.
pub fn check() -> Result<()> {
    check_api_key()
}

/// Check if the OpenAI API key is configured.
fn check_api_key() -> Result<()> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(()),
        Ok(_) => Err(LektorError::Config(
            "OPENAI_API_KEY is empty. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
        Err(_) => Err(LektorError::Config(
            "OPENAI_API_KEY not set. Set it with: export OPENAI_API_KEY='sk-...'".to_string(),
        )),
    }
}
