//! API manager trait and error types

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling the query API or reading its response
#[derive(Debug, Error)]
pub enum ApiError {
    /// The call never produced a response (connection, TLS, timeout)
    #[error("{action} failed in transport: {message}")]
    Transport { action: String, message: String },

    /// The provider answered with an error document instead of a result
    #[error("{action} rejected by provider ({code}): {message}")]
    Provider {
        action: String,
        code: String,
        message: String,
    },

    /// The response document is missing a key path the caller depends on
    #[error("Malformed {action} response: missing {path}")]
    MalformedResponse { action: String, path: String },
}

impl ApiError {
    /// Create a transport error
    pub fn transport(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            action: action.into(),
            message: message.into(),
        }
    }

    /// Create a provider rejection error
    pub fn provider(
        action: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Provider {
            action: action.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a malformed response error for a missing key path
    pub fn malformed(action: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MalformedResponse {
            action: action.into(),
            path: path.into(),
        }
    }
}

/// Result type for manager calls and adapter operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Trait for query API managers
///
/// A manager owns everything an adapter should not know about: credentials,
/// request signing, the endpoint, and the XML-to-document conversion. One
/// method covers every action: the caller names the action and passes a flat
/// mapping of request parameters (list-valued for filters and tags), and gets
/// back the parsed response document wrapped in the action's
/// `<ActionName>Response` envelope.
#[async_trait]
pub trait ApiManager: Send + Sync {
    /// Execute a named query API action and return the response document
    async fn call(&self, action: &str, params: Value) -> ApiResult<Value>;
}

#[async_trait]
impl ApiManager for Box<dyn ApiManager> {
    async fn call(&self, action: &str, params: Value) -> ApiResult<Value> {
        (**self).call(action, params).await
    }
}

#[async_trait]
impl<M: ApiManager + ?Sized> ApiManager for Arc<M> {
    async fn call(&self, action: &str, params: Value) -> ApiResult<Value> {
        (**self).call(action, params).await
    }
}
