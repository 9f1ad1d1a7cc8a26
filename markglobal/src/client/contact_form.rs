// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::debounce::DebouncedSession;
use super::gateway::ContactGateway;
use super::session::EditOutcome;
use crate::contact::{ContactError, ContactForm, SubmitOutcome};

pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_DESCRIPTION: &str = "We'll get back to you within 24 hours.";
pub const MISSING_FIELDS_TITLE: &str = "Missing information";
pub const MISSING_FIELDS_DESCRIPTION: &str = "Please fill in your name, email and message.";
pub const FAILURE_TITLE: &str = "Something went wrong";
pub const FAILURE_DESCRIPTION: &str = "We couldn't send your message. Please try again.";
pub const EMAIL_FAILURE_DESCRIPTION: &str =
    "Your message reached us but the email could not be sent. We'll still follow up.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Toast-style feedback shown to the visitor.
pub trait Notifier {
    fn notify(&self, title: &str, description: &str, variant: NoticeVariant);
}

/// The contact section: name and email fields plus the message, whose text
/// and service tags live in a [`DebouncedSession`].
pub struct ContactFormState<G, N> {
    gateway: G,
    notifier: N,
    name: String,
    email: String,
    session: DebouncedSession,
}

impl<G: ContactGateway, N: Notifier> ContactFormState<G, N> {
    pub fn new(gateway: G, notifier: N) -> Self {
        Self::with_session(gateway, notifier, DebouncedSession::new())
    }

    pub fn with_session(gateway: G, notifier: N, session: DebouncedSession) -> Self {
        Self {
            gateway,
            notifier,
            name: String::new(),
            email: String::new(),
            session,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn session(&self) -> &DebouncedSession {
        &self.session
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn edit_message(&self, text: &str) -> EditOutcome {
        self.session.edit_message(text)
    }

    pub fn message(&self) -> String {
        self.session.with_session(|session| session.message().to_string())
    }

    pub fn form(&self) -> ContactForm {
        ContactForm::new(&self.name, &self.email, &self.message())
    }

    /// Sends the form once. On success the form and service session are
    /// cleared; on failure everything is kept for another attempt.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, ContactError> {
        self.session.flush();
        let form = self.form();
        if let Err(err) = form.clone().validate() {
            self.notifier.notify(
                MISSING_FIELDS_TITLE,
                MISSING_FIELDS_DESCRIPTION,
                NoticeVariant::Destructive,
            );
            return Err(err);
        }

        match self.gateway.submit_contact_form(&form).await {
            Ok(outcome) => {
                self.notifier
                    .notify(SENT_TITLE, SENT_DESCRIPTION, NoticeVariant::Default);
                self.clear();
                Ok(outcome)
            }
            Err(err) => {
                log::warn!("Contact form submission failed: {}", err);
                let description = if err.is_email_failure() {
                    EMAIL_FAILURE_DESCRIPTION
                } else {
                    FAILURE_DESCRIPTION
                };
                self.notifier
                    .notify(FAILURE_TITLE, description, NoticeVariant::Destructive);
                Err(err)
            }
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.session.cancel_pending();
        self.session.with_session(|session| session.reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::testing::{MemoryContactStore, PipelineLog, RecordingMailer};
    use crate::contact::{ContactErrorKind, ContactService};
    use crate::templates::MiniJinjaEngine;
    use crate::util::test_config;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::sync::Arc;

    struct StubGateway {
        response: Result<SubmitOutcome, ContactError>,
        calls: RefCell<Vec<ContactForm>>,
    }

    impl StubGateway {
        fn replying(response: Result<SubmitOutcome, ContactError>) -> Self {
            Self {
                response,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactGateway for StubGateway {
        async fn submit_contact_form(
            &self,
            form: &ContactForm,
        ) -> Result<SubmitOutcome, ContactError> {
            self.calls.borrow_mut().push(form.clone());
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<(String, String, NoticeVariant)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, description: &str, variant: NoticeVariant) {
            self.notices
                .borrow_mut()
                .push((title.to_string(), description.to_string(), variant));
        }
    }

    impl RecordingNotifier {
        fn last(&self) -> (String, String, NoticeVariant) {
            self.notices.borrow().last().cloned().expect("a notice")
        }
    }

    fn filled<G: ContactGateway>(gateway: G) -> ContactFormState<G, RecordingNotifier> {
        let mut form = ContactFormState::new(gateway, RecordingNotifier::default());
        form.set_name("Asha");
        form.set_email("asha@example.com");
        form.edit_message("Looking for a new logo and website");
        form
    }

    #[tokio::test]
    async fn success_notifies_and_clears_everything() {
        let mut form = filled(StubGateway::replying(Ok(SubmitOutcome::sent())));

        let outcome = form.submit().await.expect("submit");
        assert!(outcome.success);

        let calls = form.gateway().calls.borrow().clone();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            ContactForm::new("Asha", "asha@example.com", "Looking for a new logo and website")
        );
        assert_eq!(
            form.notifier().last(),
            (
                "Message sent!".to_string(),
                "We'll get back to you within 24 hours.".to_string(),
                NoticeVariant::Default
            )
        );
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
        assert_eq!(form.message(), "");
        let session = form.session().snapshot();
        assert!(session.selected_services().is_empty());
        assert!(!session.can_undo());
    }

    #[tokio::test]
    async fn pending_detection_is_flushed_before_sending() {
        let mut form = filled(StubGateway::replying(Err(ContactError::internal(
            "Failed to save submission: disk full",
        ))));
        assert!(form.session().has_pending_detection());

        form.submit().await.expect_err("submit fails");
        assert!(!form.session().has_pending_detection());
        let session = form.session().snapshot();
        assert_eq!(
            session.selected_services(),
            ["Branding".to_string(), "Website Development".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_fields_never_reach_the_gateway() {
        let mut form = ContactFormState::new(
            StubGateway::replying(Ok(SubmitOutcome::sent())),
            RecordingNotifier::default(),
        );
        form.set_name("Asha");

        let err = form.submit().await.expect_err("incomplete");
        assert_eq!(err.kind(), ContactErrorKind::InvalidArgument);
        assert!(form.gateway().calls.borrow().is_empty());
        assert_eq!(form.notifier().last().0, MISSING_FIELDS_TITLE);
        assert_eq!(form.name(), "Asha");
    }

    #[tokio::test]
    async fn failures_keep_the_form_and_pick_feedback() {
        let mut form = filled(StubGateway::replying(Err(ContactError::internal(
            "Failed to save submission: disk full",
        ))));
        form.submit().await.expect_err("generic failure");
        assert_eq!(
            form.notifier().last(),
            (
                FAILURE_TITLE.to_string(),
                FAILURE_DESCRIPTION.to_string(),
                NoticeVariant::Destructive
            )
        );
        assert_eq!(form.name(), "Asha");
        assert_eq!(form.message(), "Looking for a new logo and website");

        let mut form = filled(StubGateway::replying(Err(ContactError::internal(
            "Failed to send confirmation email: Invalid login",
        ))));
        form.submit().await.expect_err("email failure");
        assert_eq!(form.notifier().last().1, EMAIL_FAILURE_DESCRIPTION);
        assert_eq!(form.email(), "asha@example.com");
    }

    #[tokio::test]
    async fn submits_through_the_contact_service() {
        let config = test_config();
        let log = PipelineLog::new();
        let store = Arc::new(MemoryContactStore::new(log.clone()));
        let mailer = Arc::new(RecordingMailer::new(log));
        let service = ContactService::new(
            store.clone(),
            mailer.clone(),
            Arc::new(MiniJinjaEngine::new()),
            config.app,
            config.email,
        )
        .with_env_lookup(Arc::new(|_: &str| -> Option<String> { None }));

        let mut form = filled(service);
        form.submit().await.expect("submit");

        let records = store.records();
        assert_eq!(records.len(), 1);
        assert!(records[0].email_sent);
        assert_eq!(mailer.sent().len(), 2);
    }
}
