// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use markglobal::contact::{ContactStore, NewContact, YamlContactStore};
use markglobal::util::test_fixtures::TestFixtureRoot;
use std::process::{Command, Output};

fn run_markglobal(root: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_markglobal"))
        .arg("-C")
        .arg(root)
        .args(args)
        .output()
        .expect("run markglobal")
}

fn contact(name: &str) -> NewContact {
    NewContact {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        message: "Hello".to_string(),
    }
}

#[tokio::test]
async fn contacts_list_reports_pending_submissions() {
    let fixture = TestFixtureRoot::new_unique("cli-e2e").expect("fixture");
    let store = YamlContactStore::new(fixture.runtime_paths().expect("paths").contacts_dir);
    let sent = store.create(&contact("Asha")).await.expect("create");
    store.mark_email_sent(&sent.id).await.expect("mark");
    let pending = store.create(&contact("Ravi")).await.expect("create");

    let output = run_markglobal(fixture.path(), &["contacts", "list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&sent.id));
    assert!(stdout.contains(&pending.id));
    assert!(stdout.ends_with("2 submissions\n"));

    let output = run_markglobal(fixture.path(), &["contacts", "list", "--pending"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains(&sent.id));
    assert!(stdout.contains("Ravi <ravi@example.com>"));
    assert!(stdout.ends_with("1 pending submission\n"));
}

#[test]
fn unknown_command_exits_with_usage_code() {
    let fixture = TestFixtureRoot::new_unique("cli-e2e-usage").expect("fixture");
    let output = run_markglobal(fixture.path(), &["contacts", "purge"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown command"));
}

#[test]
fn help_lists_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_markglobal"))
        .arg("--help")
        .output()
        .expect("run markglobal");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("contacts list [--pending]"));
}
