// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Value, context};

#[derive(Debug, Clone)]
pub struct UserConfirmationContext {
    app_name: String,
    tagline: String,
    site_url: String,
    contact_address: String,
    name: String,
    message: String,
}

impl UserConfirmationContext {
    pub fn new(
        app_name: &str,
        tagline: &str,
        site_url: &str,
        contact_address: &str,
        name: &str,
        message: &str,
    ) -> Self {
        Self {
            app_name: app_name.to_string(),
            tagline: tagline.to_string(),
            site_url: site_url.to_string(),
            contact_address: contact_address.to_string(),
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            tagline => &self.tagline,
            site_url => &self.site_url,
            contact_address => &self.contact_address,
            name => &self.name,
            message => &self.message
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminNotificationContext {
    submission_id: String,
    name: String,
    email: String,
    message: String,
    submitted_at: String,
}

impl AdminNotificationContext {
    pub fn new(
        submission_id: &str,
        name: &str,
        email: &str,
        message: &str,
        submitted_at: &str,
    ) -> Self {
        Self {
            submission_id: submission_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            submitted_at: submitted_at.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            submission_id => &self.submission_id,
            name => &self.name,
            email => &self.email,
            message => &self.message,
            submitted_at => &self.submitted_at
        }
    }
}
