// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

pub mod server;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use markglobal::api;
use markglobal::app_state::AppState;
use markglobal::contact::testing::{PipelineLog, RecordingMailer};
use markglobal::contact::{ContactService, ContactStore, ContactSubmission, YamlContactStore};
use markglobal::runtime_paths::RuntimePaths;
use markglobal::templates::{MiniJinjaEngine, TemplateEngine};
use markglobal::util::test_config;
use markglobal::util::test_fixtures::TestFixtureRoot;
use std::sync::Arc;

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub runtime_paths: RuntimePaths,
    pub store: Arc<YamlContactStore>,
    pub mailer: Arc<RecordingMailer>,
    pub log: PipelineLog,
    pub app_state: Arc<AppState>,
}

#[derive(Clone)]
pub struct AppBundle {
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_env(&[])
    }

    /// `vars` stands in for the process environment when resolving email settings.
    pub fn with_env(vars: &'static [(&'static str, &'static str)]) -> Self {
        let fixture = TestFixtureRoot::new_unique("harness").expect("fixture root");
        let runtime_paths = fixture.runtime_paths().expect("runtime paths");
        let config = test_config();

        let log = PipelineLog::new();
        let store = Arc::new(YamlContactStore::new(runtime_paths.contacts_dir.clone()));
        let mailer = Arc::new(RecordingMailer::new(log.clone()));
        let templates: Arc<dyn TemplateEngine> = Arc::new(MiniJinjaEngine::new());

        let contact_service = ContactService::new(
            store.clone(),
            mailer.clone(),
            templates,
            config.app.clone(),
            config.email.clone(),
        )
        .with_env_lookup(Arc::new(move |key: &str| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }));

        let app_state = Arc::new(AppState::with_contact_service(
            runtime_paths.clone(),
            Arc::new(contact_service),
        ));

        Self {
            fixture,
            runtime_paths,
            store,
            mailer,
            log,
            app_state,
        }
    }

    pub fn app_bundle(&self) -> AppBundle {
        AppBundle {
            app_state: self.app_state.clone(),
        }
    }

    pub async fn stored_submissions(&self) -> Vec<ContactSubmission> {
        self.store.list().await.expect("list submissions")
    }
}

pub fn build_test_app(
    bundle: AppBundle,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(bundle.app_state))
        .configure(api::configure)
}
