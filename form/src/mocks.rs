//! Mock registration client for testing.

use crate::client::RegistrationClient;
use crate::error::RegistrationError;
use crate::types::UserDraft;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Mock registration client.
///
/// Answers every request with a fixed outcome and records each draft it was
/// asked to register. Clones share the request log.
#[derive(Debug, Clone)]
pub struct MockRegistrationClient {
    outcome: Result<(), RegistrationError>,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<UserDraft>>>,
}

impl MockRegistrationClient {
    fn with_outcome(outcome: Result<(), RegistrationError>) -> Self {
        Self {
            outcome,
            delay: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A client whose registrations are accepted
    #[must_use]
    pub fn succeeding() -> Self {
        Self::with_outcome(Ok(()))
    }

    /// A client whose registrations are rejected with `status` and an optional body message
    #[must_use]
    pub fn rejecting(status: u16, message: Option<&str>) -> Self {
        Self::with_outcome(Err(RegistrationError::Rejected {
            status,
            message: message.map(str::to_string),
        }))
    }

    /// A client whose requests never reach the server
    #[must_use]
    pub fn failing_transport() -> Self {
        Self::with_outcome(Err(RegistrationError::Transport(
            "connection refused".to_string(),
        )))
    }

    /// Hold every answer back for `delay`
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Drafts received so far, oldest first
    #[must_use]
    pub fn requests(&self) -> Vec<UserDraft> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received so far
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for MockRegistrationClient {
    fn default() -> Self {
        Self::succeeding()
    }
}

impl RegistrationClient for MockRegistrationClient {
    fn register(
        &self,
        draft: &UserDraft,
    ) -> impl Future<Output = Result<(), RegistrationError>> + Send {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(draft.clone());

        let outcome = self.outcome.clone();
        let delay = self.delay;

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            outcome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_requests_across_clones() {
        let client = MockRegistrationClient::rejecting(409, Some("duplicado"));
        let clone = client.clone();
        let draft = UserDraft {
            email: "ana@example.com".into(),
            ..UserDraft::default()
        };

        let outcome = clone.register(&draft).await;

        assert_eq!(
            outcome,
            Err(RegistrationError::Rejected {
                status: 409,
                message: Some("duplicado".into())
            })
        );
        assert_eq!(client.request_count(), 1);
        assert_eq!(client.requests(), vec![draft]);
    }

    #[tokio::test]
    async fn test_delay_holds_answer() {
        let client = MockRegistrationClient::succeeding().with_delay(Duration::from_millis(50));
        let start = tokio::time::Instant::now();

        assert_eq!(client.register(&UserDraft::default()).await, Ok(()));
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
