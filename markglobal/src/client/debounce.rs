// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

use super::compose::DetectionOutcome;
use super::session::{EditOutcome, ServiceSession};

pub const DEFAULT_DETECTION_DELAY: Duration = Duration::from_millis(500);

/// A [`ServiceSession`] whose keyword detection runs once typing pauses.
///
/// At most one detection task is pending. Each edit replaces it, clearing the
/// message cancels it, and dropping the handle cancels it.
pub struct DebouncedSession {
    session: Arc<Mutex<ServiceSession>>,
    pending: Mutex<Option<JoinHandle<()>>>,
    delay: Duration,
}

impl DebouncedSession {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DETECTION_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(ServiceSession::new())),
            pending: Mutex::new(None),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Must be called from within a tokio runtime.
    pub fn edit_message(&self, text: &str) -> EditOutcome {
        let outcome = lock_session(&self.session).edit_message(text);
        match outcome {
            EditOutcome::Cleared => self.cancel_pending(),
            EditOutcome::DetectionPending => self.schedule_detection(),
        }
        outcome
    }

    /// Runs any pending detection immediately instead of waiting for the delay.
    pub fn flush(&self) -> Option<DetectionOutcome> {
        let task = self.pending_slot().take()?;
        task.abort();
        Some(lock_session(&self.session).run_detection())
    }

    pub fn has_pending_detection(&self) -> bool {
        self.pending_slot()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    pub fn with_session<R>(&self, action: impl FnOnce(&mut ServiceSession) -> R) -> R {
        action(&mut lock_session(&self.session))
    }

    pub fn snapshot(&self) -> ServiceSession {
        lock_session(&self.session).clone()
    }

    pub fn shared_session(&self) -> Arc<Mutex<ServiceSession>> {
        Arc::clone(&self.session)
    }

    pub fn cancel_pending(&self) {
        if let Some(task) = self.pending_slot().take() {
            task.abort();
        }
    }

    fn schedule_detection(&self) {
        let session = Arc::clone(&self.session);
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let outcome = lock_session(&session).run_detection();
            if !outcome.is_empty() {
                log::debug!(
                    "Service detection added {:?}, removed {:?}",
                    outcome.added,
                    outcome.removed
                );
            }
        });
        if let Some(previous) = self.pending_slot().replace(task) {
            previous.abort();
        }
    }

    fn pending_slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DebouncedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DebouncedSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

fn lock_session(session: &Mutex<ServiceSession>) -> MutexGuard<'_, ServiceSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}
