// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{BootstrapError, log_action};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WORKERS: u16 = 4;

/// Writes the default `config.yaml` unless one exists. Returns whether it was created.
pub fn ensure_config(root: &Path) -> Result<bool, BootstrapError> {
    let config_path = root.join("config.yaml");

    if config_path.exists() {
        return Ok(false);
    }

    let contents = default_config_yaml();

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&config_path)
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(BootstrapError::Io(err)),
    };

    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    log_action(format!(
        "created config.yaml (port {}); SMTP settings come from EMAIL_* variables",
        DEFAULT_PORT
    ));

    Ok(true)
}

fn default_config_yaml() -> String {
    format!(
        "server:\n  host: \"0.0.0.0\"\n  port: {port}\n  workers: {workers}\n\napp:\n  name: \"Mark Global\"\n  description: \"Digital Marketing Excellence\"\n  site_url: \"https://themarkglobal.co.in\"\n\nlogging:\n  level: \"info\"\n\n# SMTP overrides; EMAIL_HOST, EMAIL_PORT, EMAIL_SECURE, EMAIL_USER,\n# EMAIL_PASS and ADMIN_EMAIL take precedence when set.\nemail: {{}}\n",
        port = DEFAULT_PORT,
        workers = DEFAULT_WORKERS,
    )
}
