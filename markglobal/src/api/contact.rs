// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::app_state::AppState;
use crate::contact::callable::{CallableErrorBody, CallableRequest, CallableResult};
use crate::contact::{ContactError, ContactErrorKind, ContactForm};

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Malformed callable bodies are reported in the same envelope as
/// validation failures.
pub(super) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, _req| {
            log::warn!("Rejected malformed callable request: {}", err);
            let contact_err = ContactError::invalid_argument(format!("Invalid request: {}", err));
            InternalError::from_response(err, error_response(&contact_err)).into()
        })
}

pub fn error_response(err: &ContactError) -> HttpResponse {
    let mut builder = match err.kind() {
        ContactErrorKind::InvalidArgument => HttpResponse::BadRequest(),
        ContactErrorKind::Internal => HttpResponse::InternalServerError(),
    };
    builder.json(CallableErrorBody::from(err))
}

pub async fn submit_contact_form(
    state: web::Data<AppState>,
    payload: web::Json<CallableRequest<ContactForm>>,
) -> HttpResponse {
    match state
        .contact_service
        .submit(payload.into_inner().data)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(CallableResult { result: outcome }),
        Err(err) => error_response(&err),
    }
}
