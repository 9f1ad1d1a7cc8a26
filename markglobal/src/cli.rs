// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Offline commands run against a runtime root instead of starting the server.

use std::fmt;
use std::path::Path;

use crate::contact::emails::format_ist;
use crate::contact::{ContactStore, ContactSubmission, StoreError, YamlContactStore};
use crate::runtime_paths::RuntimePaths;

const EXIT_USAGE: i32 = 2;
const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    ListContacts { pending_only: bool },
}

#[derive(Debug)]
pub struct CliError {
    message: String,
    exit_code: i32,
}

impl CliError {
    fn usage(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: EXIT_USAGE,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: EXIT_FAILURE,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn parse_command(tokens: &[String]) -> Result<CliCommand, CliError> {
    let words: Vec<&str> = tokens.iter().map(String::as_str).collect();
    match words.as_slice() {
        ["contacts" | "contact", "list" | "ls", flags @ ..] => {
            let mut pending_only = false;
            for flag in flags {
                match *flag {
                    "--pending" => pending_only = true,
                    other => {
                        return Err(CliError::usage(format!(
                            "Unknown option for contacts list: {}",
                            other
                        )));
                    }
                }
            }
            Ok(CliCommand::ListContacts { pending_only })
        }
        ["contacts" | "contact"] => Err(CliError::usage("Missing command for contacts (try: list)")),
        _ => Err(CliError::usage(format!(
            "Unknown command: {} (see help)",
            tokens.join(" ")
        ))),
    }
}

pub fn help_text() -> String {
    let mut out = String::new();
    push_line(&mut out, "Usage:");
    push_line(&mut out, "  markglobal [options]");
    push_line(&mut out, "  markglobal [options] contacts list [--pending]");
    push_line(&mut out, "  markglobal help");
    push_line(&mut out, "");
    push_line(&mut out, "Options:");
    push_line(&mut out, "  -C <root>   Set the runtime root (default: .).");
    push_line(&mut out, "  -h, --help  Show this help.");
    push_line(&mut out, "");
    push_line(&mut out, "Commands:");
    push_line(
        &mut out,
        "  contacts list [--pending]  List stored submissions; --pending shows those whose emails were not sent.",
    );
    push_line(&mut out, "");
    push_line(&mut out, "Environment:");
    push_line(
        &mut out,
        "  EMAIL_HOST, EMAIL_PORT, EMAIL_SECURE, EMAIL_USER, EMAIL_PASS, ADMIN_EMAIL",
    );
    out
}

pub async fn run_cli(runtime_root: &Path, tokens: Vec<String>) -> i32 {
    match execute(runtime_root, &tokens).await {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(err) => {
            eprintln!("{}", err);
            err.exit_code()
        }
    }
}

async fn execute(runtime_root: &Path, tokens: &[String]) -> Result<String, CliError> {
    let command = parse_command(tokens)?;
    let runtime_paths =
        RuntimePaths::from_root(runtime_root).map_err(|err| CliError::failure(err.to_string()))?;
    let store = YamlContactStore::new(runtime_paths.contacts_dir);

    match command {
        CliCommand::ListContacts { pending_only } => {
            let records = list_contacts(&store, pending_only)
                .await
                .map_err(|err| CliError::failure(err.to_string()))?;
            Ok(render_listing(&records, pending_only))
        }
    }
}

pub async fn list_contacts(
    store: &dyn ContactStore,
    pending_only: bool,
) -> Result<Vec<ContactSubmission>, StoreError> {
    let mut records = store.list().await?;
    if pending_only {
        records.retain(|record| !record.email_sent);
    }
    Ok(records)
}

fn render_listing(records: &[ContactSubmission], pending_only: bool) -> String {
    let mut out = String::new();
    for record in records {
        push_line(&mut out, &format_submission(record));
    }
    let label = if pending_only { "pending submission" } else { "submission" };
    let plural = if records.len() == 1 { "" } else { "s" };
    push_line(&mut out, &format!("{} {}{}", records.len(), label, plural));
    out
}

pub fn format_submission(record: &ContactSubmission) -> String {
    let status = if record.email_sent { "sent" } else { "pending" };
    format!(
        "{}  {}  {:<7}  {} <{}>",
        record.id,
        format_ist(record.created_at),
        status,
        record.name,
        record.email
    )
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
