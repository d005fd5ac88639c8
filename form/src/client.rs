//! Remote registration client.

use crate::config::ClientConfig;
use crate::error::{ConfigError, RegistrationError};
use crate::types::UserDraft;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Sends a registration to the backend
///
/// The reducer issues exactly one call per submission that passes validation.
pub trait RegistrationClient: Send + Sync {
    /// Register `draft`
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Rejected`] for non-2xx answers and
    /// [`RegistrationError::Transport`] when no answer arrives.
    fn register(
        &self,
        draft: &UserDraft,
    ) -> impl Future<Output = Result<(), RegistrationError>> + Send;
}

/// `POST {api_url}/register` with body `{"user": <draft>}`
#[derive(Serialize)]
struct RegisterRequest<'a> {
    user: &'a UserDraft,
}

/// Error body returned by the backend; only `message` is read
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// [`RegistrationClient`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpRegistrationClient {
    client: reqwest::Client,
    register_url: String,
}

impl HttpRegistrationClient {
    /// Create a client for an already validated configuration
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            register_url: config.register_url(),
        }
    }

    /// Create a client from the `API_URL` environment variable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `API_URL` holds an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(&ClientConfig::from_env()?))
    }

    /// Endpoint this client posts to
    #[must_use]
    pub fn register_url(&self) -> &str {
        &self.register_url
    }
}

impl RegistrationClient for HttpRegistrationClient {
    fn register(
        &self,
        draft: &UserDraft,
    ) -> impl Future<Output = Result<(), RegistrationError>> + Send {
        async move {
            let response = self
                .client
                .post(&self.register_url)
                .json(&RegisterRequest { user: draft })
                .send()
                .await
                .map_err(|e| RegistrationError::Transport(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                tracing::debug!(status = status.as_u16(), "Registration accepted");
                return Ok(());
            }

            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.message);

            if message.is_none() {
                tracing::warn!(
                    status = status.as_u16(),
                    "Registration error body has no message"
                );
            }

            Err(RegistrationError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}
