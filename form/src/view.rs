//! Render model of the registration form.
//!
//! [`FormView`] is a snapshot of exactly what the form shows: heading, labelled
//! inputs in display order, visible helper texts, the submit button and the
//! status message. Hidden helpers and a hidden status render no text. The query
//! helpers resolve elements the way a UI test would, by placeholder or by text.

use crate::error::FormError;
use crate::messages;
use crate::types::{Field, FormState};
use std::fmt;

/// Display rows; fields sharing a row are rendered side by side
pub const LAYOUT: [&[Field]; 4] = [
    &[Field::Email],
    &[Field::Name, Field::Surname],
    &[Field::Password, Field::RepeatPassword],
    &[Field::Phone],
];

/// One rendered input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Field this input edits
    pub field: Field,
    /// Label text
    pub label: &'static str,
    /// Placeholder text
    pub placeholder: &'static str,
    /// Current value
    pub value: String,
    /// Whether the input masks its value
    pub secret: bool,
    /// Helper text, when the helper is showing
    pub helper: Option<&'static str>,
}

/// Everything the form renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Heading text
    pub heading: &'static str,
    /// Inputs grouped by row, see [`LAYOUT`]
    pub rows: Vec<Vec<FieldView>>,
    /// Submit button text
    pub submit_label: &'static str,
    /// Status text, when the status is showing
    pub status: Option<String>,
}

impl From<&FormState> for FormView {
    fn from(state: &FormState) -> Self {
        let rows = LAYOUT
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&field| FieldView {
                        field,
                        label: field.label(),
                        placeholder: field.placeholder(),
                        value: state.draft.get(field).to_string(),
                        secret: field.is_secret(),
                        helper: state.helper(field).and_then(|helper| helper.visible_text()),
                    })
                    .collect()
            })
            .collect();

        Self {
            heading: messages::HEADING,
            rows,
            submit_label: messages::SUBMIT,
            status: state.status.visible_text().map(str::to_string),
        }
    }
}

impl FormView {
    /// Inputs in display order
    pub fn fields(&self) -> impl Iterator<Item = &FieldView> {
        self.rows.iter().flatten()
    }

    /// Input whose placeholder is exactly `placeholder`
    #[must_use]
    pub fn get_by_placeholder(&self, placeholder: &str) -> Option<&FieldView> {
        self.fields().find(|view| view.placeholder == placeholder)
    }

    /// Every visible text, in render order
    ///
    /// Placeholders and input values are not text content and are excluded.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = vec![self.heading];
        for view in self.fields() {
            texts.push(view.label);
            texts.extend(view.helper);
        }
        texts.push(self.submit_label);
        texts.extend(self.status.as_deref());
        texts
    }

    /// Visible text equal to `text`, if rendered
    #[must_use]
    pub fn query_by_text(&self, text: &str) -> Option<&str> {
        self.texts().into_iter().find(|rendered| *rendered == text)
    }

    /// Visible text equal to `text`
    ///
    /// # Errors
    ///
    /// Returns [`FormError::TextNotFound`] if no element renders `text`.
    pub fn get_by_text(&self, text: &str) -> Result<&str, FormError> {
        self.query_by_text(text)
            .ok_or_else(|| FormError::TextNotFound(text.to_string()))
    }

    /// Whether any visible text contains `needle`
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| text.contains(needle))
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|view| {
                    let value = if view.secret {
                        "*".repeat(view.value.chars().count())
                    } else {
                        view.value.clone()
                    };
                    let shown = if value.is_empty() {
                        format!("<{}>", view.placeholder)
                    } else {
                        value
                    };
                    match view.helper {
                        Some(helper) => format!("{}: {shown} ({helper})", view.label),
                        None => format!("{}: {shown}", view.label),
                    }
                })
                .collect();
            writeln!(f, "  {}", cells.join(" | "))?;
        }
        write!(f, "[{}]", self.submit_label)?;
        if let Some(status) = &self.status {
            write!(f, "\n{status}")?;
        }
        Ok(())
    }
}
