//! GenAI-based LLM client implementation
//!
//! Talks to the OpenAI chat-completions API through the `genai` crate using a
//! single fixed model. The credential is handed in by the caller rather than
//! looked up from the environment here.

use super::client::LLMClient;
use super::error::BackendError;
use super::types::{ChatMessage, LLMRequest, LLMResponse, MessageRole};
use async_trait::async_trait;
use genai::adapter::AdapterKind;
use genai::chat::{ChatMessage as GenAIChatMessage, ChatRequest as GenAIChatRequest};
use genai::resolver::{AuthData, Endpoint, ServiceTargetResolver};
use genai::{Client, ModelIden, ServiceTarget};
use std::time::Instant;
use tracing::{debug, error, trace};

/// Model used for every feedback request
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Provider adapter behind [`DEFAULT_MODEL`]
pub const DEFAULT_PROVIDER: AdapterKind = AdapterKind::OpenAI;

/// Environment variable holding the API key, following the genai adapter convention
pub fn api_key_env_name() -> &'static str {
    DEFAULT_PROVIDER
        .default_key_env_name()
        .unwrap_or("OPENAI_API_KEY")
}

pub struct GenAIClient {
    client: Client,
    model: String,
    provider: AdapterKind,
    has_credentials: bool,
}

impl GenAIClient {
    /// Creates a client for [`DEFAULT_MODEL`]
    ///
    /// A missing `api_key` is not an error here; requests fail with
    /// [`BackendError::AuthenticationError`] instead, so runs with nothing to
    /// process never need a credential.
    ///
    /// `base_url` points the client at an OpenAI-compatible endpoint.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let provider = DEFAULT_PROVIDER;
        let model = DEFAULT_MODEL.to_string();
        let has_credentials = api_key.is_some();

        if let Some(url) = &base_url {
            debug!("Using custom endpoint for {}: {}", provider.as_str(), url);
        }

        let model_clone = model.clone();
        let key = api_key.unwrap_or_default();

        let resolver = ServiceTargetResolver::from_resolver_fn(
            move |service_target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
                let endpoint = match &base_url {
                    Some(url) => Endpoint::from_owned(url.clone()),
                    None => service_target.endpoint,
                };

                Ok(ServiceTarget {
                    endpoint,
                    auth: AuthData::from_single(key.clone()),
                    model: ModelIden::new(provider, &model_clone),
                })
            },
        );

        let client = Client::builder()
            .with_service_target_resolver(resolver)
            .build();

        debug!(
            "Creating GenAI client: provider={}, model={}",
            provider.as_str(),
            model
        );

        Self {
            client,
            model,
            provider,
            has_credentials,
        }
    }

    fn convert_message(msg: &ChatMessage) -> GenAIChatMessage {
        match msg.role {
            MessageRole::System => GenAIChatMessage::system(&msg.content),
            MessageRole::User => GenAIChatMessage::user(&msg.content),
            MessageRole::Assistant => GenAIChatMessage::assistant(&msg.content),
        }
    }
}

#[async_trait]
impl LLMClient for GenAIClient {
    async fn chat(&self, request: LLMRequest) -> Result<LLMResponse, BackendError> {
        if !self.has_credentials {
            return Err(BackendError::AuthenticationError {
                message: format!("{} is not set", api_key_env_name()),
            });
        }

        let start = Instant::now();

        if let Ok(json) = serde_json::to_string(&request.messages) {
            trace!(messages = %json, "Sending chat request");
        }

        let messages: Vec<GenAIChatMessage> =
            request.messages.iter().map(Self::convert_message).collect();
        let genai_request = GenAIChatRequest::new(messages);

        let response = self
            .client
            .exec_chat(&self.model, genai_request, None)
            .await
            .map_err(|e| {
                error!("{} API error: {}", self.provider.as_str(), e);
                BackendError::ApiError {
                    message: format!("{} request failed: {}", self.provider.as_str(), e),
                    status_code: None,
                }
            })?;

        let content = response.first_text().unwrap_or_default().to_string();
        debug!(
            chars = content.len(),
            response_time_ms = start.elapsed().as_millis(),
            "Received completion"
        );

        Ok(LLMResponse::text(content, start.elapsed()))
    }

    fn name(&self) -> &str {
        self.provider.as_str()
    }

    fn model_info(&self) -> Option<String> {
        Some(self.model.clone())
    }
}

impl std::fmt::Debug for GenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAIClient")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("has_credentials", &self.has_credentials)
            .finish()
    }
}
