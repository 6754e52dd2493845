//! Oracle transport
//!
//! The pipeline depends only on the [`ClassificationOracle`] call contract;
//! transport and authentication stay behind it.

use ack_api_extractor_common::{ExtractorError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Environment variable naming the chat-completions endpoint URL
pub const ENDPOINT_ENV: &str = "ACK_CLASSIFIER_ENDPOINT";
/// Environment variable holding the bearer token, if the endpoint needs one
pub const API_KEY_ENV: &str = "ACK_CLASSIFIER_API_KEY";
/// Environment variable overriding the model identifier
pub const MODEL_ENV: &str = "ACK_CLASSIFIER_MODEL";

const DEFAULT_MODEL: &str = "us.anthropic.claude-3-5-sonnet-20241022-v2:0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// External text-classification oracle
#[cfg_attr(test, mockall::automock)]
pub trait ClassificationOracle {
    /// Submit one instruction + payload pair and return the reply text
    fn invoke(&self, instruction: &str, input_text: &str) -> Result<String>;
}

/// Oracle speaking the OpenAI-compatible chat-completions wire format
///
/// One request per batch: the instruction goes out as the system message, the
/// classification payload as the user message, and the reply is the first
/// choice's content.
#[derive(Debug)]
pub struct ChatCompletionsOracle {
    endpoint: String,
    api_key: Option<String>,
    model: String,
    client: reqwest::blocking::Client,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl ChatCompletionsOracle {
    /// Build an oracle from `ACK_CLASSIFIER_*` environment variables
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var(ENDPOINT_ENV).map_err(|_| {
            ExtractorError::ClassificationInvoke(format!("{ENDPOINT_ENV} is not set"))
        })?;
        let api_key = std::env::var(API_KEY_ENV).ok();
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self::new(endpoint, api_key, model)
    }

    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                ExtractorError::ClassificationInvoke(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            model: model.into(),
            client,
        })
    }
}

impl ClassificationOracle for ChatCompletionsOracle {
    fn invoke(&self, instruction: &str, input_text: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": instruction },
                { "role": "user", "content": input_text },
            ],
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| ExtractorError::ClassificationInvoke(e.to_string()))?;

        let reply: ChatReply = response.json().map_err(|e| {
            ExtractorError::ClassificationInvoke(format!("malformed oracle response: {e}"))
        })?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ExtractorError::ClassificationInvoke("oracle response contained no choices".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_endpoint() {
        // Serialize access to the process environment with the other env test.
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(ENDPOINT_ENV);

        let err = ChatCompletionsOracle::from_env().unwrap_err();
        assert!(matches!(err, ExtractorError::ClassificationInvoke(_)));
    }

    #[test]
    fn test_from_env_reads_endpoint_and_model() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENDPOINT_ENV, "http://localhost:9999/v1/chat/completions");
        std::env::set_var(MODEL_ENV, "test-model");

        let oracle = ChatCompletionsOracle::from_env().unwrap();
        assert_eq!(oracle.endpoint, "http://localhost:9999/v1/chat/completions");
        assert_eq!(oracle.model, "test-model");

        std::env::remove_var(ENDPOINT_ENV);
        std::env::remove_var(MODEL_ENV);
    }

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
}
