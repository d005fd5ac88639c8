//! Registration form reducer.
//!
//! # Flow
//!
//! 1. `FieldChanged` replaces one draft value; nothing is validated
//! 2. `FieldBlurred` runs that field's validator and rewrites its helper
//! 3. `Submit` runs the submission checks, writes the status message and,
//!    when nothing blocks, starts the registration request
//! 4. `Registered` / `RegistrationFailed` write the outcome into the status
//! 5. `Dismissed` aborts a request still in flight
//!
//! # Submission checks
//!
//! The status slot holds one message. Checks run in a fixed order (required
//! fields, then password confirmation) and every failing check writes its
//! message, so by default the last failure is the one left visible. With
//! [`CheckPrecedence::FirstFailureWins`] the first failure is kept instead.
//! Either way the request is only sent when no check fails and no field helper
//! is showing.

use crate::actions::FormAction;
use crate::client::RegistrationClient;
use crate::environment::RegistrationEnvironment;
use crate::messages;
use crate::types::{FormState, UserDraft};
use crate::validation;
use registro_core::effect::{Effect, EffectId};
use registro_core::reducer::Reducer;
use registro_core::{cancellable_effect, smallvec, SmallVec};

/// Id of the in-flight registration request
pub const REGISTER_REQUEST: EffectId = EffectId::new("register-request");

/// Which failing submission check owns the status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckPrecedence {
    /// Every failing check overwrites the previous one
    #[default]
    LastFailureWins,
    /// The first failing check is kept
    FirstFailureWins,
}

/// A check run on submit, in the order listed in [`SUBMIT_CHECKS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitCheck {
    /// Every required field has a value
    RequiredFields,
    /// Password and confirmation are identical
    PasswordsMatch,
}

/// Submission checks in execution order
pub const SUBMIT_CHECKS: [SubmitCheck; 2] = [SubmitCheck::RequiredFields, SubmitCheck::PasswordsMatch];

impl SubmitCheck {
    /// Whether `draft` fails this check
    #[must_use]
    pub fn fails(self, draft: &UserDraft) -> bool {
        match self {
            Self::RequiredFields => !draft.is_complete(),
            Self::PasswordsMatch => !draft.passwords_match(),
        }
    }

    /// Status text written when the check fails
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::RequiredFields => messages::MISSING_REQUIRED,
            Self::PasswordsMatch => messages::PASSWORD_MISMATCH,
        }
    }
}

/// Registration form reducer.
///
/// Generic over the client so tests can inject a mock.
#[derive(Debug, Clone)]
pub struct RegistrationReducer<C> {
    precedence: CheckPrecedence,
    _phantom: std::marker::PhantomData<C>,
}

impl<C> RegistrationReducer<C> {
    /// Create a reducer with the default [`CheckPrecedence::LastFailureWins`]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_precedence(CheckPrecedence::LastFailureWins)
    }

    /// Create a reducer with an explicit check precedence
    #[must_use]
    pub const fn with_precedence(precedence: CheckPrecedence) -> Self {
        Self {
            precedence,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Configured check precedence
    #[must_use]
    pub const fn precedence(&self) -> CheckPrecedence {
        self.precedence
    }

    /// Run the submission checks and rewrite the status slot
    ///
    /// Returns whether the draft may be sent.
    fn check_submission(&self, state: &mut FormState) -> bool {
        let draft = &state.draft;
        let mut checks = SUBMIT_CHECKS.into_iter();
        let shown = match self.precedence {
            CheckPrecedence::LastFailureWins => checks.rfind(|check| check.fails(draft)),
            CheckPrecedence::FirstFailureWins => checks.find(|check| check.fails(draft)),
        };

        // Any failure shows a message, so `shown` alone tells whether a check failed.
        match shown {
            Some(check) => {
                state.set_status(check.message());
                false
            },
            None => {
                state.clear_status();
                !state.has_field_errors()
            },
        }
    }
}

impl<C> Default for RegistrationReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Reducer for RegistrationReducer<C>
where
    C: RegistrationClient + Clone + 'static,
{
    type State = FormState;
    type Action = FormAction;
    type Environment = RegistrationEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FormAction::FieldChanged { field, value } => {
                state.set_field(field, value);
                SmallVec::new()
            },

            FormAction::FieldBlurred { field } => {
                if let Some(validity) = validation::check_field(field, state.draft.get(field)) {
                    tracing::trace!(%field, ?validity, "Field validated");
                    state.set_helper(field, validity.is_error());
                }
                SmallVec::new()
            },

            FormAction::Submit => {
                if !self.check_submission(state) {
                    tracing::debug!(
                        missing = state.draft.missing_required().count(),
                        field_errors = state.has_field_errors(),
                        "Submission blocked"
                    );
                    return SmallVec::new();
                }

                tracing::debug!(
                    with_phone = !state.draft.phone.is_empty(),
                    "Submitting registration"
                );

                let client = env.client.clone();
                let draft = state.draft.clone();

                smallvec![cancellable_effect! {
                    id: REGISTER_REQUEST,
                    async {
                        match client.register(&draft).await {
                            Ok(()) => Some(FormAction::Registered),
                            Err(error) => {
                                tracing::warn!(%error, "Registration failed");
                                Some(FormAction::RegistrationFailed {
                                    message: error.user_message(),
                                })
                            },
                        }
                    }
                }]
            },

            FormAction::Dismissed => smallvec![Effect::Cancel(REGISTER_REQUEST)],

            FormAction::Registered => {
                state.set_status(messages::REGISTERED);
                SmallVec::new()
            },

            FormAction::RegistrationFailed { message } => {
                state.set_status(message);
                SmallVec::new()
            },
        }
    }
}
