// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! In-memory store and recording mailer for exercising the submission
//! pipeline without disk or network. Both write into a shared
//! [`PipelineLog`] so tests can assert on step order.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use super::mailer::{EmailSettings, MailError, Mailer, OutgoingEmail};
use super::store::{ContactStore, StoreError};
use super::{ContactSubmission, NewContact};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    Persisted(String),
    Sent { to: String, subject: String },
    MarkedSent(String),
}

#[derive(Debug, Clone, Default)]
pub struct PipelineLog {
    events: Arc<Mutex<Vec<PipelineEvent>>>,
}

impl PipelineLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: PipelineEvent) {
        lock(&self.events).push(event);
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        lock(&self.events).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
pub struct MemoryContactStore {
    records: Mutex<Vec<ContactSubmission>>,
    log: PipelineLog,
    fail_create: AtomicBool,
    fail_update: AtomicBool,
}

impl MemoryContactStore {
    pub fn new(log: PipelineLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<ContactSubmission> {
        lock(&self.records).clone()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn create(&self, contact: &NewContact) -> Result<ContactSubmission, StoreError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(StoreError::new("store unavailable"));
        }
        let record = ContactSubmission::new(Uuid::new_v4().to_string(), contact, Utc::now());
        lock(&self.records).push(record.clone());
        self.log.push(PipelineEvent::Persisted(record.id.clone()));
        Ok(record)
    }

    async fn mark_email_sent(&self, id: &str) -> Result<ContactSubmission, StoreError> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(StoreError::new("store unavailable"));
        }
        let mut records = lock(&self.records);
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::new(format!("Submission {} not found", id)))?;
        if record.email_sent {
            return Err(StoreError::new(format!(
                "Submission {} is already marked as sent",
                id
            )));
        }
        record.email_sent = true;
        record.email_sent_at = Some(Utc::now());
        self.log.push(PipelineEvent::MarkedSent(id.to_string()));
        Ok(record.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<ContactSubmission>, StoreError> {
        Ok(lock(&self.records)
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        Ok(self.records())
    }
}

/// Records every email instead of delivering it. `fail_nth(n)` makes the
/// n-th send (1-based) fail.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<(EmailSettings, OutgoingEmail)>>,
    log: PipelineLog,
    attempts: AtomicUsize,
    fail_on: AtomicUsize,
}

impl RecordingMailer {
    pub fn new(log: PipelineLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn fail_nth(&self, attempt: usize) {
        self.fail_on.store(attempt, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        lock(&self.sent)
            .iter()
            .map(|(_, email)| email.clone())
            .collect()
    }

    pub fn settings(&self) -> Vec<EmailSettings> {
        lock(&self.sent)
            .iter()
            .map(|(settings, _)| settings.clone())
            .collect()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, settings: &EmailSettings, email: &OutgoingEmail) -> Result<(), MailError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt == self.fail_on.load(Ordering::SeqCst) {
            return Err(MailError::new("Invalid login: 535 authentication failed"));
        }
        lock(&self.sent).push((settings.clone(), email.clone()));
        self.log.push(PipelineEvent::Sent {
            to: email.to.clone(),
            subject: email.subject.clone(),
        });
        Ok(())
    }
}
