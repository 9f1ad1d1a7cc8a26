// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::fmt::Display;
use std::sync::Arc;

use super::emails;
use super::mailer::{EmailSettings, Mailer};
use super::store::ContactStore;
use super::{ContactError, ContactForm, SubmitOutcome};
use crate::config::{AppConfig, EmailConfig};
use crate::templates::TemplateEngine;

pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Runs a submission through validate, persist, confirm, notify and finalize.
///
/// The steps run strictly in order and stop at the first failure. Nothing is
/// rolled back, so a failed email leaves the record with `emailSent=false`.
pub struct ContactService {
    store: Arc<dyn ContactStore>,
    mailer: Arc<dyn Mailer>,
    templates: Arc<dyn TemplateEngine>,
    app: AppConfig,
    email_config: EmailConfig,
    env_lookup: EnvLookup,
}

impl ContactService {
    pub fn new(
        store: Arc<dyn ContactStore>,
        mailer: Arc<dyn Mailer>,
        templates: Arc<dyn TemplateEngine>,
        app: AppConfig,
        email_config: EmailConfig,
    ) -> Self {
        Self {
            store,
            mailer,
            templates,
            app,
            email_config,
            env_lookup: Arc::new(|key: &str| std::env::var(key).ok()),
        }
    }

    /// Replaces the process environment as the source of email overrides.
    pub fn with_env_lookup(mut self, env_lookup: EnvLookup) -> Self {
        self.env_lookup = env_lookup;
        self
    }

    pub fn store(&self) -> &Arc<dyn ContactStore> {
        &self.store
    }

    pub fn email_settings(&self) -> EmailSettings {
        let lookup = Arc::clone(&self.env_lookup);
        EmailSettings::resolve_with(&self.email_config, move |key| lookup(key))
    }

    pub async fn submit(&self, form: ContactForm) -> Result<SubmitOutcome, ContactError> {
        let contact = form.validate().inspect_err(|err| {
            log::warn!("Rejected contact form submission: {}", err.message());
        })?;

        let settings = self.email_settings();
        log::debug!("Email config: {:?}", settings);

        let record = self
            .store
            .create(&contact)
            .await
            .map_err(step_failure("Failed to save submission"))?;
        log::info!("Saved contact submission {}", record.id);

        let confirmation = emails::user_confirmation(
            self.templates.as_ref(),
            &self.app,
            &settings.admin_address,
            &record,
        )
        .map_err(step_failure("Failed to render confirmation email"))?;
        self.mailer
            .send(&settings, &confirmation)
            .await
            .map_err(step_failure("Failed to send confirmation email"))?;
        log::info!("Confirmation email sent to user: {}", record.email);

        let notification = emails::admin_notification(
            self.templates.as_ref(),
            &self.app,
            &settings.admin_address,
            &record,
        )
        .map_err(step_failure("Failed to render notification email"))?;
        self.mailer
            .send(&settings, &notification)
            .await
            .map_err(step_failure("Failed to send notification email"))?;
        log::info!("Notification email sent to admin: {}", settings.admin_address);

        self.store
            .mark_email_sent(&record.id)
            .await
            .map_err(step_failure("Failed to update submission"))?;

        Ok(SubmitOutcome::sent())
    }
}

fn step_failure<E: Display>(step: &'static str) -> impl FnOnce(E) -> ContactError {
    move |err| {
        log::error!("Contact submission failed: {}: {}", step, err);
        ContactError::internal(format!("{}: {}", step, err))
    }
}
