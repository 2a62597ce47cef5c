// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::app_state::AppState;
use crate::error;
use crate::store::StoreError;
use crate::templates::render_minijinja_template;
use actix_web::{HttpResponse, Result, web};
use minijinja::Value;

pub mod flash;
pub mod folders;
pub mod forms;
pub mod terms;

/// Routing table. Mutations are POST-only; GET on a destructive path serves
/// the confirmation page and nothing else.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(folders::index))
        .route("/folders/", web::get().to(folders::folder_list))
        .route("/folders/create/", web::get().to(folders::folder_create_form))
        .route("/folders/create/", web::post().to(folders::folder_create))
        .route(
            "/folders/{id}/delete/",
            web::get().to(folders::folder_delete_confirm),
        )
        .route(
            "/folders/{id}/delete/",
            web::post().to(folders::folder_delete),
        )
        .route("/folders/{folder_id}/terms/", web::get().to(terms::term_list))
        .route(
            "/folders/{folder_id}/terms/create/",
            web::get().to(terms::term_create_form),
        )
        .route(
            "/folders/{folder_id}/terms/create/",
            web::post().to(terms::term_create),
        )
        .route("/terms/{id}/edit/", web::get().to(terms::term_edit_form))
        .route("/terms/{id}/edit/", web::post().to(terms::term_edit))
        .route(
            "/terms/{id}/delete/",
            web::get().to(terms::term_delete_confirm),
        )
        .route("/terms/{id}/delete/", web::post().to(terms::term_delete))
        .route(
            "/terms/{id}/toggle/{next_status}/",
            web::post().to(terms::term_toggle_status),
        );
}

pub(crate) fn render_page(
    state: &AppState,
    template_name: &str,
    context: Value,
) -> Result<HttpResponse> {
    match render_minijinja_template(state.templates.as_ref(), template_name, context) {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(e) => {
            log::error!("Failed to render template {}: {}", template_name, e);
            error::serve_500(&state.error_renderer, Some(state.templates.as_ref()))
        }
    }
}

pub(crate) fn store_failure(
    state: &AppState,
    operation: &str,
    err: StoreError,
) -> Result<HttpResponse> {
    log::error!("Storage failure during {}: {}", operation, err);
    error::serve_500(&state.error_renderer, Some(state.templates.as_ref()))
}

pub(crate) fn not_found(state: &AppState) -> Result<HttpResponse> {
    error::serve_404(&state.error_renderer, Some(state.templates.as_ref()))
}
