//! Gemini completion gateway
//!
//! Implements the `CompletionGateway` port over the Gemini
//! `generateContent` REST endpoint via reqwest. The adapter owns the
//! fixed sampling policy and the provider-specific prompt composition:
//! Gemini takes a single text turn, so a system prompt is prepended to
//! the user prompt with a blank line between them.

use super::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use tracing::debug;
use verisolve_application::{CompletionGateway, CompletionRequest, GatewayError};

/// Default Gemini API endpoint
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Explicit adapter configuration.
///
/// The credential is injected here; the adapter never reads the
/// environment itself.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Gateway adapter for the Gemini completion API
pub struct GeminiGateway {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(GEMINI_API_URL)
            .trim_end_matches('/');
        format!("{}/models/{}:generateContent", base, self.config.model)
    }

    /// Compose system and user prompt into the single text turn Gemini
    /// expects: system first, separated by a blank line.
    fn compose(request: &CompletionRequest) -> String {
        match request.system.as_deref() {
            Some(system) if !system.is_empty() => {
                format!("{}\n\n{}", system, request.prompt)
            }
            _ => request.prompt.clone(),
        }
    }

    /// Map a non-2xx response body to a typed gateway error.
    fn classify_error(status: u16, body: &str) -> GatewayError {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string());

        if status == 429 || message.to_lowercase().contains("quota") {
            GatewayError::RateLimited(message)
        } else {
            GatewayError::Api { status, message }
        }
    }

    /// Turn a parsed response into text or the matching error.
    fn into_text(response: GenerateContentResponse) -> Result<String, GatewayError> {
        if let Some(feedback) = &response.prompt_feedback
            && let Some(reason) = &feedback.block_reason
        {
            return Err(GatewayError::Blocked(reason.clone()));
        }

        response.text().ok_or(GatewayError::Empty)
    }
}

#[async_trait]
impl CompletionGateway for GeminiGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let body = GenerateContentRequest::from_text(Self::compose(&request));

        debug!(model = %self.config.model, "Sending generateContent request");

        let http_response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        let status = http_response.status().as_u16();
        if !(200..300).contains(&status) {
            let error_body = http_response.text().await.unwrap_or_default();
            return Err(Self::classify_error(status, &error_body));
        }

        let response: GenerateContentResponse = http_response
            .json()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        Self::into_text(response)
    }
}
