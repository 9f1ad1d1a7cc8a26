// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

/// Insertion-ordered set of selected service names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSelection {
    services: Vec<String>,
}

impl ServiceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.iter().any(|service| service == name)
    }

    /// Returns `true` when the service was not selected before.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.services.push(name.to_string());
        true
    }

    /// Returns `true` when the service was selected before.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.services.len();
        self.services.retain(|service| service != name);
        self.services.len() != before
    }

    /// Returns `true` when the service is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.remove(name) {
            false
        } else {
            self.services.push(name.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.services.clear();
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.services
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(String::as_str)
    }
}
