//! Headless registration form.
//!
//! [`RegistrationForm`] mounts a [`Store`] around the registration reducer and
//! exposes the interactions a user has with the rendered form: typing into a
//! field, leaving it, pressing submit and closing the form.
//!
//! # Example
//!
//! ```ignore
//! use registro_form::{Field, RegistrationForm};
//!
//! let form = RegistrationForm::from_env()?;
//! form.change(Field::Phone, "612345678").await?;
//! form.blur(Field::Phone).await?;
//!
//! let view = form.submit_and_settle(Duration::from_secs(10)).await?;
//! println!("{view}");
//!
//! form.unmount(Duration::from_secs(1)).await?;
//! ```

use crate::actions::FormAction;
use crate::client::{HttpRegistrationClient, RegistrationClient};
use crate::environment::RegistrationEnvironment;
use crate::error::{ConfigError, FormError};
use crate::reducer::{REGISTER_REQUEST, RegistrationReducer};
use crate::types::{Field, FormState};
use crate::view::FormView;
use registro_runtime::{EffectHandle, Store};
use std::time::Duration;

/// Store that runs one registration form
pub type RegistrationStore<C> =
    Store<FormState, FormAction, RegistrationEnvironment<C>, RegistrationReducer<C>>;

/// A mounted registration form
///
/// Every interaction is reduced in order by the underlying store. The store
/// lives as long as the form: dropping the form closes it, so a pending request
/// is aborted and its outcome never applied. [`RegistrationForm::unmount`] does
/// the same and also waits for the remaining effects.
pub struct RegistrationForm<C>
where
    C: RegistrationClient + Clone + 'static,
{
    store: RegistrationStore<C>,
}

impl RegistrationForm<HttpRegistrationClient> {
    /// Mount a form that posts to the API named by `API_URL`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `API_URL` holds an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::mount(HttpRegistrationClient::from_env()?))
    }
}

impl<C> RegistrationForm<C>
where
    C: RegistrationClient + Clone + 'static,
{
    /// Mount an empty form backed by `client`
    #[must_use]
    pub fn mount(client: C) -> Self {
        Self::with_reducer(client, RegistrationReducer::new())
    }

    /// Mount an empty form with a configured reducer
    #[must_use]
    pub fn with_reducer(client: C, reducer: RegistrationReducer<C>) -> Self {
        tracing::debug!(precedence = ?reducer.precedence(), "Mounting registration form");

        Self {
            store: Store::new(
                FormState::default(),
                reducer,
                RegistrationEnvironment::new(client),
            ),
        }
    }

    /// Replace the value of `field`
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Store`] once the form has been unmounted.
    pub async fn change(&self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        self.store
            .send(FormAction::FieldChanged {
                field,
                value: value.into(),
            })
            .await?;
        Ok(())
    }

    /// Replace the value of the field whose key is `name`
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not a field key, or
    /// [`FormError::Store`] once the form has been unmounted.
    pub async fn change_by_name(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.change(name.parse()?, value).await
    }

    /// Move focus away from `field`, running its validator
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Store`] once the form has been unmounted.
    pub async fn blur(&self, field: Field) -> Result<(), FormError> {
        self.store.send(FormAction::FieldBlurred { field }).await?;
        Ok(())
    }

    /// Press the submit button
    ///
    /// Returns as soon as the checks have run; the handle completes once the
    /// registration outcome, if a request was sent, has been applied.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Store`] once the form has been unmounted.
    pub async fn submit(&self) -> Result<EffectHandle, FormError> {
        Ok(self.store.send(FormAction::Submit).await?)
    }

    /// Press the submit button and wait for the outcome to be rendered
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Store`] with [`StoreError::Timeout`] if the request
    /// does not settle within `timeout`.
    ///
    /// [`StoreError::Timeout`]: registro_runtime::StoreError::Timeout
    pub async fn submit_and_settle(&self, timeout: Duration) -> Result<FormView, FormError> {
        let mut handle = self.submit().await?;
        handle.wait_with_timeout(timeout).await?;
        Ok(self.view().await)
    }

    /// Snapshot of the form state
    pub async fn state(&self) -> FormState {
        self.store.state(FormState::clone).await
    }

    /// What the form currently renders
    pub async fn view(&self) -> FormView {
        self.store.state(|state| FormView::from(state)).await
    }

    /// Whether a registration request is in flight
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.store.in_flight(REGISTER_REQUEST) > 0
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &RegistrationStore<C> {
        &self.store
    }

    /// Tear the form down
    ///
    /// A pending registration request is aborted and its outcome is never
    /// applied. Other effects get `timeout` to finish.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Store`] if the form was already unmounted or effects
    /// outlive `timeout`.
    pub async fn unmount(self, timeout: Duration) -> Result<(), FormError> {
        self.store.send(FormAction::Dismissed).await?;
        self.store.shutdown(timeout).await?;
        tracing::debug!("Registration form unmounted");
        Ok(())
    }
}

impl<C> Drop for RegistrationForm<C>
where
    C: RegistrationClient + Clone + 'static,
{
    fn drop(&mut self) {
        let aborted = self.store.close();
        if aborted > 0 {
            tracing::debug!(aborted, "Registration form dropped with a pending request");
        }
    }
}

impl<C> std::fmt::Debug for RegistrationForm<C>
where
    C: RegistrationClient + Clone + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("submitting", &self.is_submitting())
            .field("shutting_down", &self.store.is_shutting_down())
            .finish_non_exhaustive()
    }
}
