// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Contact-form submissions: validation, persistence and the two
//! notification emails.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod callable;
mod documents;
pub mod emails;
mod error;
mod mailer;
mod service;
mod store;
pub mod testing;

pub use error::{ContactError, ContactErrorKind};
pub use mailer::{EmailSettings, MailError, Mailer, OutgoingEmail, SmtpMailer};
pub use service::{ContactService, EnvLookup};
pub use store::{ContactStore, StoreError, YamlContactStore};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Email sent successfully";
const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Raw form payload as received; any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    /// Presence check only; the email address syntax is not inspected.
    pub fn validate(self) -> Result<NewContact, ContactError> {
        match (
            non_empty(self.name),
            non_empty(self.email),
            non_empty(self.message),
        ) {
            (Some(name), Some(email), Some(message)) => Ok(NewContact {
                name,
                email,
                message,
            }),
            _ => Err(ContactError::invalid_argument(MISSING_FIELDS_MESSAGE)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// One stored document in the `contacts` collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default)]
    pub email_sent_at: Option<DateTime<Utc>>,
}

impl ContactSubmission {
    pub fn new(id: String, contact: &NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            message: contact.message.clone(),
            created_at,
            email_sent: false,
            email_sent_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

impl SubmitOutcome {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SUBMIT_SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_complete_form() {
        let contact = ContactForm::new("Asha", "asha@example.com", "Hello")
            .validate()
            .expect("valid form");
        assert_eq!(contact.name, "Asha");
        assert_eq!(contact.email, "asha@example.com");
    }

    #[test]
    fn validate_rejects_missing_or_empty_fields() {
        let cases = [
            ContactForm::default(),
            ContactForm {
                name: None,
                ..ContactForm::new("a", "b", "c")
            },
            ContactForm::new("Asha", "", "Hello"),
            ContactForm::new("Asha", "asha@example.com", ""),
        ];
        for form in cases {
            let err = form.validate().expect_err("invalid form");
            assert_eq!(err.kind(), ContactErrorKind::InvalidArgument);
            assert_eq!(err.message(), "Missing required fields");
        }
    }

    #[test]
    fn validate_does_not_check_email_syntax() {
        assert!(ContactForm::new("Asha", "not-an-address", "Hi").validate().is_ok());
    }

    #[test]
    fn submission_serializes_with_camel_case_fields() {
        let contact = ContactForm::new("Asha", "asha@example.com", "Hello")
            .validate()
            .expect("valid form");
        let record = ContactSubmission::new("id-1".to_string(), &contact, Utc::now());
        let yaml = serde_yaml::to_string(&record).expect("serialize");
        assert!(yaml.contains("createdAt:"));
        assert!(yaml.contains("emailSent: false"));
        assert!(yaml.contains("emailSentAt: null"));
    }
}
