//! Reqwest-backed `LanguageModel`

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use dine_common::OpenAiConfig;
use dine_core::{ChatRequest, DomainError, LanguageModel, UpstreamResult};

use super::dto::{CompletionRequestDto, CompletionResponseDto};
use crate::http::{build_client, map_transport_error, read_json, trim_base};

const SERVICE: &str = "language model";

/// Chat completions client
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client()?,
            base_url: trim_base(base_url),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn from_config(config: &OpenAiConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.base_url, config.api_key.clone(), config.model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    #[instrument(skip(self, request), fields(model = %self.model, temperature = request.temperature))]
    async fn complete(&self, request: ChatRequest) -> UpstreamResult<String> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&CompletionRequestDto::new(&self.model, &request))
            .send()
            .await
            .map_err(|e| map_transport_error(SERVICE, e))?;

        let decoded: CompletionResponseDto = read_json(SERVICE, response).await?;
        let text = decoded.into_text().ok_or(DomainError::EmptyModelReply)?;

        debug!(chars = text.chars().count(), "Model replied");
        Ok(text)
    }
}
