// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::compose::{DetectionOutcome, detect_services, enhance_message, generate_service_message};
use super::history::MessageHistory;
use super::selection::ServiceSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The message was emptied and the whole session restarted.
    Cleared,
    /// The message changed; a detection pass should be scheduled.
    DetectionPending,
}

/// Per-visitor state behind the contact form: selected services, the
/// displayed message and its undo/redo history.
///
/// Every mutating operation applies its follow-up rules directly, so the
/// selection and the message never depend on the order in which a UI
/// re-renders.
#[derive(Debug, Clone, Default)]
pub struct ServiceSession {
    selection: ServiceSelection,
    history: MessageHistory,
    message: String,
    manual_message: bool,
    original_message: Option<String>,
    enhanced: bool,
}

impl ServiceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn selected_services(&self) -> &[String] {
        self.selection.as_slice()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    pub fn history(&self) -> &MessageHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn has_manual_message(&self) -> bool {
        self.manual_message
    }

    pub fn is_enhanced(&self) -> bool {
        self.enhanced
    }

    pub fn original_message(&self) -> Option<&str> {
        self.original_message.as_deref()
    }

    pub fn toggle_service(&mut self, name: &str) {
        if self.selection.toggle(name) {
            self.selection_grew();
        }
    }

    pub fn add_service(&mut self, name: &str) {
        if self.selection.insert(name) {
            self.selection_grew();
        }
    }

    pub fn remove_service(&mut self, name: &str) {
        self.selection.remove(name);
    }

    pub fn clear_services(&mut self) {
        self.selection.clear();
    }

    pub fn push_to_history(&mut self, message: impl Into<String>) {
        self.history.push(message);
    }

    /// Applies a keystroke-level edit from the user.
    pub fn edit_message(&mut self, text: &str) -> EditOutcome {
        if text.is_empty() {
            self.reset();
            return EditOutcome::Cleared;
        }
        self.message = text.to_string();
        self.manual_message = true;
        EditOutcome::DetectionPending
    }

    /// The debounced pass: sync tags with the message and snapshot it.
    pub fn run_detection(&mut self) -> DetectionOutcome {
        let outcome = detect_services(&self.message, &mut self.selection);
        if self.history.current() != self.message {
            self.history.push(self.message.clone());
        }
        outcome
    }

    pub fn undo(&mut self) -> Option<String> {
        let message = self.history.undo()?.to_string();
        self.show_history_entry(&message);
        Some(message)
    }

    pub fn redo(&mut self) -> Option<String> {
        let message = self.history.redo()?.to_string();
        self.show_history_entry(&message);
        Some(message)
    }

    /// "Rearrange": rewrite the typed message around the selected services.
    ///
    /// Returns `None` when there is nothing to rearrange.
    pub fn enhance(&mut self) -> Option<String> {
        if self.message.is_empty() || self.selection.is_empty() {
            return None;
        }
        let enhanced = enhance_message(&self.message, self.selection.as_slice());
        if !self.enhanced {
            self.original_message = Some(self.message.clone());
        }
        self.enhanced = true;
        self.message = enhanced.clone();
        self.history.push(enhanced.clone());
        Some(enhanced)
    }

    pub fn revert_enhancement(&mut self) -> Option<String> {
        if !self.enhanced {
            return None;
        }
        let original = self.original_message.take()?;
        self.enhanced = false;
        self.message = original.clone();
        self.history.push(original.clone());
        Some(original)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn selection_grew(&mut self) {
        if self.manual_message {
            return;
        }
        self.message = generate_service_message(self.selection.as_slice());
        self.history.push(self.message.clone());
    }

    /// An empty entry restarts tagging like clearing the message does, but
    /// the history is kept so redo still works.
    fn show_history_entry(&mut self, message: &str) {
        self.message = message.to_string();
        if self.message.is_empty() {
            self.selection.clear();
            self.manual_message = false;
            self.original_message = None;
            self.enhanced = false;
            return;
        }
        detect_services(&self.message, &mut self.selection);
    }
}
