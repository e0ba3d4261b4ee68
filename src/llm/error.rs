//! Errors returned by LLM clients

use thiserror::Error;

/// Errors that can occur while talking to the model service
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// API request failed with the given message
    #[error("{}", format_api_error(.message, .status_code))]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// Credentials are missing or were rejected
    #[error("Authentication failed: {message}")]
    AuthenticationError { message: String },

    /// Invalid or malformed response from the LLM
    #[error("Invalid response from LLM: {message}")]
    InvalidResponse { message: String },

    /// Generic error for other cases
    #[error("Error: {message}")]
    Other { message: String },
}

fn format_api_error(message: &str, status_code: &Option<u16>) -> String {
    match status_code {
        Some(code) => format!("API error ({}): {}", code, message),
        None => format!("API error: {}", message),
    }
}
