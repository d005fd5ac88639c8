//! # Registro Core
//!
//! Core traits and types for the Registro reducer architecture.
//!
//! A form is modelled as a state machine: every user interaction and every
//! network outcome is an action fed to a pure reducer, and every side effect
//! is returned as a value for the runtime to execute.
//!
//! ## Core Concepts
//!
//! - **State**: The data a component owns (field values, helpers, messages)
//! - **Action**: All possible inputs to a reducer (user input, network outcomes)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies (HTTP clients and the like)
//!
//! ## Example
//!
//! ```ignore
//! use registro_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! impl Reducer for FormReducer {
//!     type State = FormState;
//!     type Action = FormAction;
//!     type Environment = FormEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut FormState,
//!         action: FormAction,
//!         env: &FormEnvironment,
//!     ) -> SmallVec<[Effect<FormAction>; 4]> {
//!         // Business logic goes here
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Declarative macros for building effects
pub mod effect_macros;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable and cancellable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Identifier shared by every effect that can be cancelled together
    ///
    /// Reducers usually declare one `const` id per kind of in-flight work:
    ///
    /// ```
    /// use registro_core::effect::EffectId;
    ///
    /// const SUBMIT: EffectId = EffectId::new("submit");
    /// assert_eq!(SUBMIT.name(), "submit");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EffectId(&'static str);

    impl EffectId {
        /// Create an effect id from a static name
        #[must_use]
        pub const fn new(name: &'static str) -> Self {
            Self(name)
        }

        /// The name this id was created with
        #[must_use]
        pub const fn name(self) -> &'static str {
            self.0
        }
    }

    impl std::fmt::Display for EffectId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),

        /// Run `effect` so that it can later be aborted with [`Effect::Cancel`]
        Cancellable {
            /// Group the spawned work is registered under
            id: EffectId,
            /// The effect to run
            effect: Box<Effect<Action>>,
        },

        /// Abort every in-flight effect registered under the id
        ///
        /// Actions those effects would have produced are never delivered.
        Cancel(EffectId),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
                Effect::Cancellable { id, effect } => f
                    .debug_struct("Effect::Cancellable")
                    .field("id", id)
                    .field("effect", effect)
                    .finish(),
                Effect::Cancel(id) => f.debug_tuple("Effect::Cancel").field(id).finish(),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Make this effect cancellable under `id`
        #[must_use]
        pub fn cancellable(self, id: EffectId) -> Effect<Action> {
            Effect::Cancellable {
                id,
                effect: Box::new(self),
            }
        }

        /// Whether this effect does nothing when executed
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Cancellable { effect, .. } => effect.is_none(),
                Effect::Future(_) | Effect::Cancel(_) => false,
            }
        }

        /// The cancellation id this effect is registered under, if any
        #[must_use]
        pub const fn cancel_id(&self) -> Option<EffectId> {
            match self {
                Effect::Cancellable { id, .. } => Some(*id),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::{Effect, EffectId};

    const LOAD: EffectId = EffectId::new("load");

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Loaded,
    }

    #[test]
    fn test_none_effects() {
        assert!(Effect::<TestAction>::None.is_none());
        assert!(Effect::<TestAction>::None.cancellable(LOAD).is_none());
        assert!(!Effect::<TestAction>::Cancel(LOAD).is_none());
    }

    #[test]
    fn test_cancellable_wraps_effect() {
        let effect: Effect<TestAction> =
            Effect::Future(Box::pin(async { Some(TestAction::Loaded) })).cancellable(LOAD);

        assert_eq!(effect.cancel_id(), Some(LOAD));
        assert!(!effect.is_none());
        assert_eq!(
            format!("{effect:?}"),
            "Effect::Cancellable { id: EffectId(\"load\"), effect: Effect::Future(<future>) }"
        );
    }

    #[test]
    fn test_future_effect_yields_action() {
        let effect: Effect<TestAction> = Effect::Future(Box::pin(async { Some(TestAction::Loaded) }));

        let Effect::Future(fut) = effect else {
            unreachable!("constructed as a future");
        };
        assert_eq!(tokio_test::block_on(fut), Some(TestAction::Loaded));
    }

    #[test]
    fn test_effect_id_display() {
        assert_eq!(LOAD.to_string(), "load");
    }
}
