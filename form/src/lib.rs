//! # Registro Form
//!
//! Headless user-registration form built on the Registro reducer architecture.
//!
//! ## Features
//!
//! - **Inline validation**: email and phone formats are checked when the field loses focus
//! - **Submission checks**: required fields and password confirmation, one status message
//! - **Remote registration**: `POST {API_URL}/register` with the draft as `{"user": ..}`
//! - **Render model**: [`FormView`] exposes exactly the text the form shows
//!
//! ## Architecture
//!
//! ```text
//! change / blur / submit → RegistrationReducer → (FormState, Effects)
//!                                              ↓
//!                          RegistrationClient::register → Registered | RegistrationFailed
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use registro_form::{Field, RegistrationForm};
//!
//! let form = RegistrationForm::from_env()?;
//! for (field, value) in [
//!     (Field::Email, "ana@example.com"),
//!     (Field::Name, "Ana"),
//!     (Field::Surname, "García"),
//!     (Field::Password, "s3cret"),
//!     (Field::RepeatPassword, "s3cret"),
//! ] {
//!     form.change(field, value).await?;
//! }
//! form.blur(Field::Email).await?;
//!
//! let view = form.submit_and_settle(Duration::from_secs(10)).await?;
//! assert_eq!(view.status.as_deref(), Some("Registrado correctamente"));
//! ```

// Public modules
pub mod actions;
pub mod client;
pub mod config;
pub mod environment;
pub mod error;
pub mod form;
pub mod messages;
pub mod reducer;
pub mod types;
pub mod validation;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export main types for convenience
pub use actions::FormAction;
pub use client::{HttpRegistrationClient, RegistrationClient};
pub use config::ClientConfig;
pub use environment::RegistrationEnvironment;
pub use error::{ConfigError, FormError, RegistrationError};
pub use form::{RegistrationForm, RegistrationStore};
pub use reducer::{CheckPrecedence, REGISTER_REQUEST, RegistrationReducer};
pub use types::{Field, FieldHelper, FormState, StatusMessage, UserDraft};
pub use validation::Validity;
pub use view::{FieldView, FormView};
