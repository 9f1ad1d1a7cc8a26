// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

/// Linear undo/redo history of message snapshots.
///
/// Starts with a single empty snapshot. The cursor always points at a valid
/// entry; pushing while the cursor is behind the end discards the redo tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MessageHistory {
    pub fn new() -> Self {
        Self {
            entries: vec![String::new()],
            cursor: 0,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(message.into());
        self.cursor = self.entries.len() - 1;
    }

    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].as_str())
    }

    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].as_str())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for MessageHistory {
    fn default() -> Self {
        Self::new()
    }
}
