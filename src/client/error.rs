//! Client Error Types
//!
//! Every failure the request wrapper can surface, from auth loss to a
//! response body that does not match its record type.

use serde::Deserialize;
use thiserror::Error;

use super::transport::TransportError;

/// Message used when the server gives no usable `error` field
pub const FALLBACK_MESSAGE: &str = "Erro na requisição";

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Server answered 401; the session has been torn down
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport failed before a response arrived
    #[error(transparent)]
    Network(#[from] TransportError),

    /// Success body did not match the expected record
    #[error("Unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Load aborted by navigating away from its page
    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    /// Text shown to the user in a notice
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Unauthorized { message } | ClientError::Api { message, .. } => {
                message.clone()
            }
            ClientError::Network(_) => "Falha de conexão com o servidor".to_string(),
            ClientError::Decode { .. } => "Resposta inesperada do servidor".to_string(),
            ClientError::Encode(_) => FALLBACK_MESSAGE.to_string(),
            ClientError::Cancelled => "Operação cancelada".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }

    /// Build the error for a non-success response
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

        if status == 401 {
            ClientError::Unauthorized { message }
        } else {
            ClientError::Api { status, message }
        }
    }
}

/// Error body sent by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
