// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::HttpServer;
use std::net::TcpListener;

pub async fn start_test_server(bundle: super::AppBundle) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");

    actix_web::rt::spawn(async move {
        let _ = HttpServer::new(move || super::build_test_app(bundle.clone()))
            .workers(1)
            .listen(listener)
            .expect("listen")
            .run()
            .await;
    });

    format!("http://{}", addr)
}
