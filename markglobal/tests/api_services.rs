// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::{http::StatusCode, test};
use markglobal::catalog::SERVICES;
use serde_json::Value;

#[actix_web::test]
async fn services_endpoint_lists_catalog_in_order() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::get().uri("/api/services").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = test::read_body_json(resp).await;

    let services = json
        .get("services")
        .and_then(Value::as_array)
        .expect("services array");
    assert_eq!(services.len(), SERVICES.len());

    let names: Vec<&str> = services
        .iter()
        .filter_map(|service| service.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(
        names,
        vec![
            "Social Media Marketing",
            "Meta Ads & Paid Ads",
            "Product Design",
            "Branding",
            "Website Development",
            "Automation & AI Agents",
        ]
    );

    let branding_keywords: Vec<&str> = services[3]
        .get("keywords")
        .and_then(Value::as_array)
        .expect("keywords")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(branding_keywords.contains(&"logo"));
}

#[actix_web::test]
async fn submit_requires_post() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::get()
        .uri("/api/submitContactForm")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}
