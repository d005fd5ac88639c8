//! Error types for the registration form.

use crate::messages;
use registro_runtime::StoreError;
use thiserror::Error;

/// Why a registration request did not succeed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The server answered with a non-2xx status
    #[error("registration rejected with status {status}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// `message` field of the JSON error body, when present
        message: Option<String>,
    },

    /// The request never produced a response
    #[error("registration request failed: {0}")]
    Transport(String),
}

impl RegistrationError {
    /// Text to show the user for this failure
    ///
    /// The server's message is shown verbatim; a missing or blank message, and
    /// transport failures, fall back to a fixed text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } | Self::Transport(_) => {
                messages::REGISTRATION_FALLBACK.to_string()
            },
        }
    }
}

/// Invalid client configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL does not parse
    #[error("invalid API URL {url:?}: {reason}")]
    InvalidUrl {
        /// The rejected value
        url: String,
        /// Parser message
        reason: String,
    },

    /// The API base URL is not http or https
    #[error("unsupported API URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
}

/// Errors surfaced by the form driver
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A field name that is not one of the draft keys
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A text lookup on the rendered form found nothing
    #[error("no rendered text matches {0:?}")]
    TextNotFound(String),

    /// The form's store rejected the action
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_verbatim() {
        let error = RegistrationError::Rejected {
            status: 409,
            message: Some("Ya existe un usuario con este email".into()),
        };
        assert_eq!(error.user_message(), "Ya existe un usuario con este email");
    }

    #[test]
    fn test_missing_message_falls_back() {
        for error in [
            RegistrationError::Rejected {
                status: 500,
                message: None,
            },
            RegistrationError::Rejected {
                status: 400,
                message: Some("   ".into()),
            },
            RegistrationError::Transport("connection refused".into()),
        ] {
            assert_eq!(error.user_message(), messages::REGISTRATION_FALLBACK);
        }
    }
}
