// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::config::ValidatedConfig;
use crate::contact::{ContactService, SmtpMailer, YamlContactStore};
use crate::runtime_paths::RuntimePaths;
use crate::templates::MiniJinjaEngine;

pub struct AppState {
    pub runtime_paths: RuntimePaths,
    pub contact_service: Arc<ContactService>,
}

impl AppState {
    /// Production wiring: YAML store under the runtime root and SMTP delivery.
    pub fn new(config: &ValidatedConfig, runtime_paths: RuntimePaths) -> Self {
        let contact_service = ContactService::new(
            Arc::new(YamlContactStore::new(runtime_paths.contacts_dir.clone())),
            Arc::new(SmtpMailer::new()),
            Arc::new(MiniJinjaEngine::new()),
            config.app.clone(),
            config.email.clone(),
        );
        Self::with_contact_service(runtime_paths, Arc::new(contact_service))
    }

    pub fn with_contact_service(
        runtime_paths: RuntimePaths,
        contact_service: Arc<ContactService>,
    ) -> Self {
        Self {
            runtime_paths,
            contact_service,
        }
    }
}
