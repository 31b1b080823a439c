//! LLM Gateway port
//!
//! Defines the interface for communicating with the completion service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("content was blocked by safety filters: {0}")]
    Blocked(String),

    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Http(String),

    #[error("empty response from model")]
    Empty,
}

impl GatewayError {
    /// Rate-limit failures are the only transient class the solve loop
    /// retries inline.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, GatewayError::RateLimited(_))
    }

    /// Safety blocks are reported with a dedicated sentinel text.
    pub fn is_blocked(&self) -> bool {
        matches!(self, GatewayError::Blocked(_))
    }
}

/// One completion request: an optional system prompt plus the user prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: Option<String>,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Gateway for one-shot text completion
///
/// This port defines how the application layer talks to the model
/// provider. Implementations (adapters) live in the infrastructure
/// layer. The gateway is stateless: every call is a fresh completion
/// with a fixed sampling configuration owned by the adapter.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send a composed prompt and return the model's text
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_predicate() {
        assert!(GatewayError::RateLimited("quota".into()).is_rate_limit());
        assert!(!GatewayError::Empty.is_rate_limit());
        assert!(
            !GatewayError::Api {
                status: 500,
                message: "boom".into()
            }
            .is_rate_limit()
        );
    }

    #[test]
    fn test_request_builder() {
        let request = CompletionRequest::new("solve this").with_system("you are a solver");
        assert_eq!(request.prompt, "solve this");
        assert_eq!(request.system.as_deref(), Some("you are a solver"));
    }
}
