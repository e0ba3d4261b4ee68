//! LLM client abstraction layer
//!
//! A trait-based seam between the feedback generator and the model service,
//! so the real GenAI client and the mock used in tests are interchangeable.

mod client;
mod error;
mod genai;
mod mock;
mod types;

pub use client::LLMClient;
pub use error::BackendError;
pub use self::genai::{api_key_env_name, GenAIClient, DEFAULT_MODEL, DEFAULT_PROVIDER};
pub use mock::{MockLLMClient, MockResponse};
pub use types::{ChatMessage, LLMRequest, LLMResponse, MessageRole};
