// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use std::sync::Arc;
use wordbook::app_state::AppState;
use wordbook::flashcards;
use wordbook::store::{Status, Store, TermFields};
use wordbook::util::test_fixtures::TestFixtureRoot;

pub const APP_NAME: &str = "Wordbook Test";

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub store: Arc<Store>,
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    pub fn new(prefix: &str) -> Self {
        let fixture = TestFixtureRoot::new_unique(prefix).expect("fixture root");
        let store = Arc::new(Store::open(&fixture.db_path()).expect("open store"));
        let app_state = Arc::new(AppState::new(APP_NAME, store.clone()));
        Self {
            fixture,
            store,
            app_state,
        }
    }

    /// Seed one term through the store, returning its id.
    pub fn seed_term(
        &self,
        folder_id: i64,
        term: &str,
        reading: &str,
        meaning: &str,
        status: Status,
    ) -> i64 {
        self.store
            .upsert_term(
                folder_id,
                &TermFields {
                    term: term.to_string(),
                    reading: reading.to_string(),
                    meaning: meaning.to_string(),
                    status: Some(status),
                },
            )
            .expect("seed term")
            .term
            .id
    }
}

pub fn build_test_app(
    app_state: Arc<AppState>,
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
        .app_data(web::Data::from(app_state))
        .configure(flashcards::configure)
}

pub fn location_header<B>(response: &ServiceResponse<B>) -> String {
    response
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .expect("Location header")
        .to_string()
}

/// Decode the `flash` query parameter out of a redirect target.
pub fn flash_in_location(location: &str) -> Option<String> {
    let query = location.split('?').nth(1)?;
    for pair in query.split('&') {
        if let Some(encoded) = pair.strip_prefix("flash=") {
            return urlencoding::decode(encoded).ok().map(|s| s.into_owned());
        }
    }
    None
}

pub async fn body_text<B: actix_web::body::MessageBody>(response: ServiceResponse<B>) -> String {
    let bytes = test::read_body(response).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
