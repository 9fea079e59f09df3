//! Contact form
//!
//! Local form state for the contact screen. Submitting only validates and acknowledges; the
//! message is not sent anywhere.

use std::fmt;

use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

/// Form fields, in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Sender name (required)
    Name,
    /// Reply address (required)
    Email,
    /// Phone number
    Phone,
    /// Subject line
    Subject,
    /// Message body (required)
    Message,
}

impl ContactField {
    /// Every field in display order.
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Whether submission is refused while this field is blank.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            ContactField::Name | ContactField::Email | ContactField::Message
        )
    }

    /// Field label.
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    /// Input placeholder.
    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "your@email.com",
            ContactField::Phone => "+92 320 5919383",
            ContactField::Subject => "How can we help?",
            ContactField::Message => "Write your message here...",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failure on submit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactFormError {
    /// One or more required fields are blank.
    #[error("Please fill in all required fields")]
    MissingRequiredFields(SmallVec<[ContactField; 3]>),
}

/// Contact form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
}

/// Acknowledgement shown after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Sender name as entered
    pub name: String,
    /// Reply address as entered
    pub email: String,
}

impl ContactSubmission {
    /// Dialog title.
    pub const TITLE: &'static str = "Message Sent!";

    /// Dialog text.
    pub const MESSAGE: &'static str =
        "Thank you for contacting us. We will get back to you within 24 hours.";
}

impl ContactForm {
    /// Title of the validation error dialog.
    pub const ERROR_TITLE: &'static str = "Error";

    /// Current value of a field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Replace a field's value.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };

        *slot = value.into();
    }

    /// Required fields that are empty or whitespace, in form order.
    pub fn missing_fields(&self) -> SmallVec<[ContactField; 3]> {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }

    /// Check the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ContactFormError::MissingRequiredFields`] listing every blank required field.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        let missing = self.missing_fields();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactFormError::MissingRequiredFields(missing))
        }
    }

    /// Validate, acknowledge and reset the form.
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves the form untouched when a required field is
    /// blank.
    pub fn submit(&mut self) -> Result<ContactSubmission, ContactFormError> {
        self.validate()?;

        let submission = ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
        };

        self.reset();

        Ok(submission)
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Kind of action a contact detail offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactActionKind {
    /// Open a mail client
    Email,
    /// Start a call
    Phone,
}

/// Prompt shown when an actionable contact detail is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAction {
    /// Action kind
    pub kind: ContactActionKind,
    /// Address or number
    pub target: String,
}

impl ContactAction {
    /// Build the action for a contact value.
    pub fn new(kind: ContactActionKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self.kind {
            ContactActionKind::Email => "Email",
            ContactActionKind::Phone => "Call",
        }
    }

    /// Dialog text.
    pub fn prompt(&self) -> String {
        match self.kind {
            ContactActionKind::Email => format!("Open email client to: {}", self.target),
            ContactActionKind::Phone => format!("Call: {}", self.target),
        }
    }
}
