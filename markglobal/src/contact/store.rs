// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use async_trait::async_trait;
use chrono::Utc;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

use super::documents::{document_path, list_document_ids, read_document, write_document};
use super::{ContactSubmission, NewContact};

#[derive(Debug, Clone)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StoreError {}

/// The `contacts` collection. Creation and the sent-flag update are each
/// atomic per record; nothing spans records.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persists a new record with `email_sent = false` and a fresh id.
    async fn create(&self, contact: &NewContact) -> Result<ContactSubmission, StoreError>;

    /// Sets `email_sent` and `email_sent_at`. Fails if the record is missing
    /// or was already marked.
    async fn mark_email_sent(&self, id: &str) -> Result<ContactSubmission, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<ContactSubmission>, StoreError>;

    /// All records, oldest first.
    async fn list(&self) -> Result<Vec<ContactSubmission>, StoreError>;
}

pub struct YamlContactStore {
    collection_dir: PathBuf,
}

impl YamlContactStore {
    pub fn new(collection_dir: PathBuf) -> Self {
        Self { collection_dir }
    }

    pub fn collection_dir(&self) -> &std::path::Path {
        &self.collection_dir
    }

    async fn run_blocking<F, R>(&self, task: F) -> Result<R, StoreError>
    where
        F: FnOnce(PathBuf) -> Result<R, StoreError> + Send + 'static,
        R: Send + 'static,
    {
        let dir = self.collection_dir.clone();
        tokio::task::spawn_blocking(move || task(dir))
            .await
            .map_err(|err| StoreError::new(format!("Contact store task failed: {}", err)))?
    }
}

fn checked_id(id: &str) -> Result<String, StoreError> {
    Uuid::parse_str(id)
        .map(|uuid| uuid.to_string())
        .map_err(|_| StoreError::new(format!("Invalid submission id '{}'", id)))
}

#[async_trait]
impl ContactStore for YamlContactStore {
    async fn create(&self, contact: &NewContact) -> Result<ContactSubmission, StoreError> {
        let record = ContactSubmission::new(Uuid::new_v4().to_string(), contact, Utc::now());
        self.run_blocking(move |dir| {
            let path = document_path(&dir, &record.id);
            if path.exists() {
                return Err(StoreError::new(format!(
                    "Submission {} already exists",
                    record.id
                )));
            }
            write_document(&path, &record)?;
            Ok(record)
        })
        .await
    }

    async fn mark_email_sent(&self, id: &str) -> Result<ContactSubmission, StoreError> {
        let id = checked_id(id)?;
        self.run_blocking(move |dir| {
            let path = document_path(&dir, &id);
            let mut record: ContactSubmission = read_document(&path)?
                .ok_or_else(|| StoreError::new(format!("Submission {} not found", id)))?;
            if record.email_sent {
                return Err(StoreError::new(format!(
                    "Submission {} is already marked as sent",
                    id
                )));
            }
            record.email_sent = true;
            record.email_sent_at = Some(Utc::now());
            write_document(&path, &record)?;
            Ok(record)
        })
        .await
    }

    async fn get(&self, id: &str) -> Result<Option<ContactSubmission>, StoreError> {
        let id = checked_id(id)?;
        self.run_blocking(move |dir| read_document(&document_path(&dir, &id)))
            .await
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        self.run_blocking(|dir| {
            let mut records = Vec::new();
            for id in list_document_ids(&dir)? {
                if let Some(record) = read_document::<ContactSubmission>(&document_path(&dir, &id))? {
                    records.push(record);
                }
            }
            records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            Ok(records)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_fixtures::TestFixtureRoot;

    fn contact() -> NewContact {
        NewContact {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "Need a new logo".to_string(),
        }
    }

    fn store(fixture: &TestFixtureRoot) -> YamlContactStore {
        YamlContactStore::new(fixture.runtime_paths().expect("paths").contacts_dir)
    }

    #[tokio::test]
    async fn create_persists_unsent_record() {
        let fixture = TestFixtureRoot::new_unique("store-create").expect("fixture");
        let store = store(&fixture);

        let record = store.create(&contact()).await.expect("create");
        assert!(!record.email_sent);
        assert!(record.email_sent_at.is_none());

        let loaded = store.get(&record.id).await.expect("get").expect("exists");
        assert_eq!(loaded, record);
        assert!(fixture.contacts_dir().join(format!("{}.yaml", record.id)).is_file());
    }

    #[tokio::test]
    async fn mark_email_sent_updates_once() {
        let fixture = TestFixtureRoot::new_unique("store-mark").expect("fixture");
        let store = store(&fixture);
        let record = store.create(&contact()).await.expect("create");

        let updated = store.mark_email_sent(&record.id).await.expect("mark");
        assert!(updated.email_sent);
        assert!(updated.email_sent_at.is_some());
        assert_eq!(updated.created_at, record.created_at);

        let err = store.mark_email_sent(&record.id).await.expect_err("second mark");
        assert!(err.to_string().contains("already marked"));
    }

    #[tokio::test]
    async fn mark_email_sent_rejects_unknown_and_invalid_ids() {
        let fixture = TestFixtureRoot::new_unique("store-unknown").expect("fixture");
        let store = store(&fixture);

        let missing = Uuid::new_v4().to_string();
        let err = store.mark_email_sent(&missing).await.expect_err("missing");
        assert!(err.to_string().contains("not found"));

        let err = store.get("../config").await.expect_err("invalid id");
        assert!(err.to_string().contains("Invalid submission id"));
    }

    #[tokio::test]
    async fn list_returns_records_in_creation_order() {
        let fixture = TestFixtureRoot::new_unique("store-list").expect("fixture");
        let store = store(&fixture);
        let first = store.create(&contact()).await.expect("first");
        let second = store.create(&contact()).await.expect("second");

        let records = store.list().await.expect("list");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first.id);
        assert_eq!(records[1].id, second.id);
    }
}
