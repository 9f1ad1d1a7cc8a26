// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

mod contact;
mod services;

pub use contact::error_response;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(contact::json_config())
            .route(
                "/submitContactForm",
                web::post().to(contact::submit_contact_form),
            )
            .route("/services", web::get().to(services::list_services)),
    );
}
