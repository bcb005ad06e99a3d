//! Demo contact form. Nothing is sent anywhere.

use crate::error::{FolioError, FolioResult};

/// Message shown after a successful demo submission.
pub const ACKNOWLEDGMENT: &str = "Message sent! (demo) - Thank you for contacting me.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// First blank field, in form order.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    /// Acknowledge and reset the draft.
    ///
    /// A blank field leaves the draft untouched.
    pub fn submit(&mut self) -> FolioResult<&'static str> {
        if let Some(field) = self.missing_field() {
            tracing::warn!(field, "Contact form submitted with a blank field");
            return Err(FolioError::MissingField(field));
        }
        tracing::info!(chars = self.message.chars().count(), "Demo contact form submitted");
        *self = ContactDraft::default();
        Ok(ACKNOWLEDGMENT)
    }
}
