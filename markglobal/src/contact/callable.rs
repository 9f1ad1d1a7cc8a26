// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Wire envelope of callable endpoints: requests wrap their payload in
//! `data`, successes in `result`, failures in `error`.

use serde::{Deserialize, Serialize};

use super::{ContactError, ContactErrorKind};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallableRequest<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallableResult<T> {
    pub result: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CallableError {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallableErrorBody {
    pub error: CallableError,
}

impl From<&ContactError> for CallableErrorBody {
    fn from(err: &ContactError) -> Self {
        Self {
            error: CallableError {
                status: err.kind().status().to_string(),
                message: err.message().to_string(),
            },
        }
    }
}

impl From<CallableErrorBody> for ContactError {
    /// Unknown statuses are treated as internal failures.
    fn from(body: CallableErrorBody) -> Self {
        let kind = ContactErrorKind::from_status(&body.error.status)
            .unwrap_or(ContactErrorKind::Internal);
        ContactError::new(kind, body.error.message)
    }
}
