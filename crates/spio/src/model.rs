use crate::config::Config;
use crate::prelude::*;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use spio_core::codegen::build_prompt;

/// A text completion backend.
///
/// Implementations prepend the code-generation preamble themselves; callers
/// pass the bare user request.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, request: &str) -> Result<String, Error>;
}

/// Client for an Ollama-compatible `/api/generate` endpoint.
pub struct OllamaClient {
    client: reqwest::Client,
    url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl OllamaClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.model_timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: config.ai_api_url.clone(),
            model: config.ai_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn complete(&self, request: &str) -> Result<String, Error> {
        let body = GenerateBody {
            model: &self.model,
            prompt: build_prompt(request),
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                num_predict: self.max_tokens,
            },
        };

        log::debug!("POST {} (model {})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Model(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Model(format!("{status}: {}", text.trim())));
        }

        let reply: GenerateReply = response
            .json()
            .await
            .map_err(|e| Error::Model(format!("invalid response body: {e}")))?;

        if let Some(error) = reply.error {
            return Err(Error::Model(error));
        }

        Ok(reply.response.unwrap_or_default())
    }
}
