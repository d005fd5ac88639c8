//! Dependencies injected into the registration reducer.

use crate::client::RegistrationClient;

/// Registration environment
///
/// # Type Parameters
///
/// - `C`: Client used to send the registration
#[derive(Debug, Clone)]
pub struct RegistrationEnvironment<C>
where
    C: RegistrationClient + Clone,
{
    /// Remote registration client
    pub client: C,
}

impl<C> RegistrationEnvironment<C>
where
    C: RegistrationClient + Clone,
{
    /// Create a new environment around `client`
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}
