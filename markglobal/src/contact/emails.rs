// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! The two messages sent for every submission.

use chrono::{DateTime, FixedOffset, Utc};

use super::ContactSubmission;
use super::mailer::OutgoingEmail;
use crate::config::AppConfig;
use crate::templates::{
    ADMIN_NOTIFICATION_TEMPLATE, AdminNotificationContext, TemplateEngine,
    USER_CONFIRMATION_TEMPLATE, UserConfirmationContext, render_minijinja_template,
};

/// India Standard Time, UTC+05:30.
const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;
const IST_FORMAT: &str = "%A, %-d %B %Y at %-I:%M %P";

/// Formats `at` in India Standard Time, e.g. "Monday, 19 October 2026 at 6:25 pm".
pub fn format_ist(at: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(IST_OFFSET_SECONDS) {
        Some(offset) => at.with_timezone(&offset).format(IST_FORMAT).to_string(),
        None => at.format(IST_FORMAT).to_string(),
    }
}

pub fn user_confirmation(
    engine: &dyn TemplateEngine,
    app: &AppConfig,
    contact_address: &str,
    contact: &ContactSubmission,
) -> Result<OutgoingEmail, minijinja::Error> {
    let context = UserConfirmationContext::new(
        &app.name,
        &app.description,
        &app.site_url,
        contact_address,
        &contact.name,
        &contact.message,
    );
    let html = render_minijinja_template(engine, USER_CONFIRMATION_TEMPLATE, context.to_value())?;
    Ok(OutgoingEmail {
        from_name: app.name.clone(),
        to: contact.email.clone(),
        reply_to: None,
        subject: format!("Thank You for Contacting {}!", app.name),
        html,
    })
}

/// Operator notification; replies go straight to the submitter.
pub fn admin_notification(
    engine: &dyn TemplateEngine,
    app: &AppConfig,
    admin_address: &str,
    contact: &ContactSubmission,
) -> Result<OutgoingEmail, minijinja::Error> {
    let submitted_at = format_ist(contact.created_at);
    let context = AdminNotificationContext::new(
        &contact.id,
        &contact.name,
        &contact.email,
        &contact.message,
        &submitted_at,
    );
    let html = render_minijinja_template(engine, ADMIN_NOTIFICATION_TEMPLATE, context.to_value())?;
    Ok(OutgoingEmail {
        from_name: format!("{} Website", app.name),
        to: admin_address.to_string(),
        reply_to: Some(contact.email.clone()),
        subject: format!("New Contact Form Submission from {}", contact.name),
        html,
    })
}
