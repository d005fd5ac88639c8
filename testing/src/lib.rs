//! # Registro Testing
//!
//! Testing utilities and helpers for the Registro reducer architecture.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Assertion helpers for the effects a reducer returns
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use registro_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(RegistrationReducer::new())
//!     .with_env(test_environment())
//!     .given_state(FormState::default())
//!     .when_action(FormAction::Submit)
//!     .then_state(|state| assert!(state.status.show))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use std::sync::Once;


pub use reducer_test::{ReducerTest, assertions};

static TRACING: Once = Once::new();

/// Install a `tracing` subscriber for tests
///
/// Honours `RUST_LOG`; defaults to `warn`. Output goes through the test
/// writer so it is captured per test. Safe to call from every test.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
