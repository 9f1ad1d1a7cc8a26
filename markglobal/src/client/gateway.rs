// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use async_trait::async_trait;

use crate::contact::callable::{CallableErrorBody, CallableRequest, CallableResult};
use crate::contact::{ContactError, ContactForm, ContactService, SubmitOutcome};

pub const SUBMIT_CONTACT_FORM_PATH: &str = "/api/submitContactForm";

/// The remote `submitContactForm` call as seen from the form.
#[async_trait(?Send)]
pub trait ContactGateway {
    async fn submit_contact_form(&self, form: &ContactForm) -> Result<SubmitOutcome, ContactError>;
}

#[async_trait(?Send)]
impl ContactGateway for ContactService {
    async fn submit_contact_form(&self, form: &ContactForm) -> Result<SubmitOutcome, ContactError> {
        self.submit(form.clone()).await
    }
}

/// Calls a running site over HTTP using the callable envelope.
pub struct HttpContactGateway {
    client: awc::Client,
    endpoint: String,
}

impl HttpContactGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: awc::Client::default(),
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                SUBMIT_CONTACT_FORM_PATH
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ContactGateway for HttpContactGateway {
    async fn submit_contact_form(&self, form: &ContactForm) -> Result<SubmitOutcome, ContactError> {
        let mut response = self
            .client
            .post(&self.endpoint)
            .send_json(&CallableRequest { data: form })
            .await
            .map_err(|err| {
                ContactError::internal(format!("Failed to reach {}: {}", self.endpoint, err))
            })?;
        let status = response.status();
        let body = response.body().await.map_err(|err| {
            ContactError::internal(format!("Failed to read contact response: {}", err))
        })?;

        if status.is_success() {
            let parsed: CallableResult<SubmitOutcome> = serde_json::from_slice(&body)
                .map_err(|err| ContactError::internal(format!("Invalid contact response: {}", err)))?;
            return Ok(parsed.result);
        }

        match serde_json::from_slice::<CallableErrorBody>(&body) {
            Ok(error_body) => Err(error_body.into()),
            Err(_) => Err(ContactError::internal(format!(
                "Contact endpoint returned {}",
                status
            ))),
        }
    }
}
