//! Form state: field values, per-field helpers and the status message.

use crate::error::FormError;
use crate::messages;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the six inputs of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Email address (required, format-checked)
    Email,
    /// First name (required)
    Name,
    /// Surname (required)
    Surname,
    /// Password (required)
    Password,
    /// Password confirmation (required, must equal `Password`)
    RepeatPassword,
    /// Phone number (optional, format-checked)
    Phone,
}

impl Field {
    /// Every field, in display order
    pub const ALL: [Self; 6] = [
        Self::Email,
        Self::Name,
        Self::Surname,
        Self::Password,
        Self::RepeatPassword,
        Self::Phone,
    ];

    /// Key used for this field in the draft and on the wire
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Password => "password",
            Self::RepeatPassword => "repeatPassword",
            Self::Phone => "phone",
        }
    }

    /// Label rendered above the input
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Name => "NOMBRE",
            Self::Surname => "APELLIDOS",
            Self::Password => "CONTRASEÑA",
            Self::RepeatPassword => "REPITA LA CONTRASEÑA",
            Self::Phone => "TELÉFONO",
        }
    }

    /// Placeholder rendered inside the empty input (same as the key)
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        self.key()
    }

    /// Whether submission is blocked while this field is empty
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Phone)
    }

    /// Whether the input masks its value
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::RepeatPassword)
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// In-progress, unvalidated registration data
///
/// Serializes with the wire keys (`repeatPassword` in camelCase).
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Email address
    pub email: String,
    /// First name
    pub name: String,
    /// Surname
    pub surname: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub repeat_password: String,
    /// Phone number, may be empty
    pub phone: String,
}

impl UserDraft {
    /// Current value of `field`
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Name => &self.name,
            Field::Surname => &self.surname,
            Field::Password => &self.password,
            Field::RepeatPassword => &self.repeat_password,
            Field::Phone => &self.phone,
        }
    }

    /// Replace `field` with `value`, leaving every other field untouched
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Name => &mut self.name,
            Field::Surname => &mut self.surname,
            Field::Password => &mut self.password,
            Field::RepeatPassword => &mut self.repeat_password,
            Field::Phone => &mut self.phone,
        };
        *slot = value;
    }

    /// Required fields that are still empty, in display order
    pub fn missing_required(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
    }

    /// Whether every required field has a value
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_required().next().is_none()
    }

    /// Whether the password and its confirmation are identical
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.password == self.repeat_password
    }
}

// Passwords never reach logs.
impl std::fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDraft")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("surname", &self.surname)
            .field("password", &"<redacted>")
            .field("repeat_password", &"<redacted>")
            .field("phone", &self.phone)
            .finish()
    }
}

/// Validity flag and fixed message of a format-checked field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHelper {
    /// `true` while the field is invalid
    pub show: bool,
    /// Message shown while `show` is set
    pub text: &'static str,
}

impl FieldHelper {
    /// A hidden helper carrying `text`
    #[must_use]
    pub const fn new(text: &'static str) -> Self {
        Self { show: false, text }
    }

    /// Text to render, if the helper is showing
    #[must_use]
    pub const fn visible_text(&self) -> Option<&'static str> {
        if self.show { Some(self.text) } else { None }
    }
}

/// Single top-level feedback slot; every write replaces the previous message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    /// Whether the message is visible
    pub show: bool,
    /// Message text
    pub text: String,
}

impl StatusMessage {
    /// A visible message
    #[must_use]
    pub fn shown(text: impl Into<String>) -> Self {
        Self {
            show: true,
            text: text.into(),
        }
    }

    /// Text to render, if the message is showing
    #[must_use]
    pub fn visible_text(&self) -> Option<&str> {
        self.show.then_some(self.text.as_str())
    }
}

/// Everything the registration form renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Current field values
    pub draft: UserDraft,
    /// Email format helper
    pub email_helper: FieldHelper,
    /// Phone format helper
    pub phone_helper: FieldHelper,
    /// Top-level status message
    pub status: StatusMessage,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            draft: UserDraft::default(),
            email_helper: FieldHelper::new(messages::EMAIL_FORMAT),
            phone_helper: FieldHelper::new(messages::PHONE_FORMAT),
            status: StatusMessage::default(),
        }
    }
}

impl FormState {
    /// Replace one field value; helpers and status are not touched
    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    /// Helper of `field`, for the fields that have one
    #[must_use]
    pub const fn helper(&self, field: Field) -> Option<&FieldHelper> {
        match field {
            Field::Email => Some(&self.email_helper),
            Field::Phone => Some(&self.phone_helper),
            _ => None,
        }
    }

    /// Show or hide the helper of `field`; fields without a helper are ignored
    pub fn set_helper(&mut self, field: Field, show: bool) {
        let helper = match field {
            Field::Email => &mut self.email_helper,
            Field::Phone => &mut self.phone_helper,
            _ => return,
        };
        *helper = FieldHelper { show, ..*helper };
    }

    /// Whether any format helper is currently showing
    #[must_use]
    pub const fn has_field_errors(&self) -> bool {
        self.email_helper.show || self.phone_helper.show
    }

    /// Replace the status with a visible message
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = StatusMessage::shown(text);
    }

    /// Replace the status with a hidden, empty message
    pub fn clear_status(&mut self) {
        self.status = StatusMessage::default();
    }
}
