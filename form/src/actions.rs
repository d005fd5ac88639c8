//! Everything that can happen to the registration form.

use crate::types::Field;

/// Inputs to [`RegistrationReducer`](crate::reducer::RegistrationReducer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    // User input
    /// The user typed into `field`
    FieldChanged {
        /// Field that changed
        field: Field,
        /// Its complete new value
        value: String,
    },

    /// `field` lost focus
    FieldBlurred {
        /// Field that lost focus
        field: Field,
    },

    /// The submit button was pressed
    Submit,

    /// The form is being torn down
    Dismissed,

    // Registration outcomes
    /// The server accepted the registration
    Registered,

    /// The server rejected the registration, or it never arrived
    RegistrationFailed {
        /// Text to show the user
        message: String,
    },
}
