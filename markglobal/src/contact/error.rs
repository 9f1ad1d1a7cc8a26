// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactErrorKind {
    /// Client-correctable; nothing was persisted.
    InvalidArgument,
    /// A downstream step failed; a record with `emailSent=false` may remain.
    Internal,
}

impl ContactErrorKind {
    pub fn status(&self) -> &'static str {
        match self {
            ContactErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ContactErrorKind::Internal => "INTERNAL",
        }
    }

    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "INVALID_ARGUMENT" => Some(ContactErrorKind::InvalidArgument),
            "INTERNAL" => Some(ContactErrorKind::Internal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactError {
    kind: ContactErrorKind,
    message: String,
}

impl ContactError {
    pub fn new(kind: ContactErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ContactErrorKind::InvalidArgument, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ContactErrorKind::Internal, message)
    }

    pub fn kind(&self) -> ContactErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the failure came from sending or rendering one of the emails.
    pub fn is_email_failure(&self) -> bool {
        self.kind == ContactErrorKind::Internal && self.message.to_lowercase().contains("email")
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.status(), self.message)
    }
}

impl Error for ContactError {}
