//! User-facing text rendered by the form.
//!
//! These strings are part of the rendered contract and must not change.

/// Form heading
pub const HEADING: &str = "Registro";

/// Submit button text
pub const SUBMIT: &str = "Registrar";

/// Email helper text, shown while the email format is invalid
pub const EMAIL_FORMAT: &str = "Formato de email incorrecto";

/// Phone helper text, shown while the phone format is invalid
pub const PHONE_FORMAT: &str = "Formato de teléfono incorrecto";

/// Shown when a required field is empty on submit
pub const MISSING_REQUIRED: &str = "Falta algún campo obligatorio";

/// Shown when the password confirmation differs on submit
pub const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden";

/// Shown after the server accepts the registration
pub const REGISTERED: &str = "Registrado correctamente";

/// Shown when the server rejects the registration without a usable message,
/// or when the request never reaches it
pub const REGISTRATION_FALLBACK: &str = "No se ha podido completar el registro";
