// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::Value;

mod context;
mod engine;

pub use context::{AdminNotificationContext, UserConfirmationContext};
pub use engine::{MiniJinjaEngine, TemplateEngine};

pub const USER_CONFIRMATION_TEMPLATE: &str = "email/user_confirmation.html";
pub const ADMIN_NOTIFICATION_TEMPLATE: &str = "email/admin_notification.html";

/// Render a minijinja template with the given context
pub fn render_minijinja_template(
    engine: &dyn TemplateEngine,
    template_name: &str,
    context: Value,
) -> Result<String, minijinja::Error> {
    engine.render(template_name, context)
}
