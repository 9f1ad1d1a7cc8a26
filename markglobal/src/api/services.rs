// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::catalog::{SERVICES, ServiceDefinition};

#[derive(Serialize)]
struct ServicesResponse {
    services: &'static [ServiceDefinition],
}

pub async fn list_services() -> HttpResponse {
    HttpResponse::Ok().json(ServicesResponse { services: SERVICES })
}
