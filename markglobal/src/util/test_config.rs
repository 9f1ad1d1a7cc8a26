// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::{
    AppConfig, EmailConfig, LoggingConfig, ServerConfig, ValidatedConfig,
};

#[derive(Debug, Clone)]
pub struct TestConfigBuilder {
    config: ValidatedConfig,
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ValidatedConfig {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 0,
                    workers: 1,
                },
                app: AppConfig {
                    name: "Mark Global".to_string(),
                    description: "Digital Marketing Excellence".to_string(),
                    site_url: "https://themarkglobal.co.in".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                },
                email: EmailConfig {
                    username: Some("robot@example.com".to_string()),
                    ..EmailConfig::default()
                },
            },
        }
    }

    pub fn with_app_name(mut self, name: &str) -> Self {
        self.config.app.name = name.to_string();
        self
    }

    pub fn with_email(mut self, email: EmailConfig) -> Self {
        self.config.email = email;
        self
    }

    pub fn build(self) -> ValidatedConfig {
        self.config
    }
}

pub fn test_config() -> ValidatedConfig {
    TestConfigBuilder::new().build()
}
