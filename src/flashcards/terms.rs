// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::flash::{Flash, redirect_with_flash};
use super::forms::{TermFormErrors, TermSubmission, validate_term};
use super::{not_found, render_page, store_failure};
use crate::app_state::AppState;
use crate::store::{Folder, Status, Term};
use crate::templates::{TermDeleteContext, TermFormContext, TermListContext};
use actix_web::{HttpResponse, Result, web};
use log::info;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TermListQuery {
    pub status: Option<String>,
    pub flash: Option<String>,
    pub flash_kind: Option<String>,
}

fn term_list_url(folder_id: i64) -> String {
    format!("/folders/{}/terms/", folder_id)
}

fn load_folder(state: &AppState, id: i64) -> Result<std::result::Result<Folder, HttpResponse>> {
    match state.store.get_folder(id) {
        Ok(Some(folder)) => Ok(Ok(folder)),
        Ok(None) => not_found(state).map(Err),
        Err(err) => store_failure(state, "folder lookup", err).map(Err),
    }
}

fn load_term(state: &AppState, id: i64) -> Result<std::result::Result<Term, HttpResponse>> {
    match state.store.get_term(id) {
        Ok(Some(term)) => Ok(Ok(term)),
        Ok(None) => not_found(state).map(Err),
        Err(err) => store_failure(state, "term lookup", err).map(Err),
    }
}

pub async fn term_list(
    path: web::Path<i64>,
    query: web::Query<TermListQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let folder = match load_folder(&state, path.into_inner())? {
        Ok(folder) => folder,
        Err(response) => return Ok(response),
    };

    // An unrecognized status value means no filter, not an error.
    let status = query.status.as_deref().and_then(Status::parse);
    let terms = match state.store.list_terms(folder.id, status) {
        Ok(terms) => terms,
        Err(err) => return store_failure(&state, "term listing", err),
    };

    let flash = Flash::from_query(query.flash.as_deref(), query.flash_kind.as_deref());
    let context = TermListContext::new(&state.app_name, folder, terms, status, flash);
    render_page(&state, "term_list.html", context.to_value())
}

pub async fn term_create_form(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let folder = match load_folder(&state, path.into_inner())? {
        Ok(folder) => folder,
        Err(response) => return Ok(response),
    };

    let action = format!("/folders/{}/terms/create/", folder.id);
    let values = TermSubmission {
        status: Status::New.as_str().to_string(),
        ..TermSubmission::default()
    };
    let context = TermFormContext::new(
        &state.app_name,
        folder,
        "create",
        action,
        values,
        TermFormErrors::default(),
    );
    render_page(&state, "term_form.html", context.to_value())
}

pub async fn term_create(
    path: web::Path<i64>,
    form: web::Form<TermSubmission>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let folder = match load_folder(&state, path.into_inner())? {
        Ok(folder) => folder,
        Err(response) => return Ok(response),
    };
    let submission = form.into_inner();

    let fields = match validate_term(&submission) {
        Ok(fields) => fields,
        Err(errors) => {
            let action = format!("/folders/{}/terms/create/", folder.id);
            let context = TermFormContext::new(
                &state.app_name,
                folder,
                "create",
                action,
                submission,
                errors,
            );
            return render_page(&state, "term_form.html", context.to_value());
        }
    };

    let upsert = match state.store.upsert_term(folder.id, &fields) {
        Ok(upsert) => upsert,
        Err(err) => return store_failure(&state, "term upsert", err),
    };

    let flash = if upsert.created {
        info!("Added term {} to folder {}", upsert.term.term, folder.name);
        Flash::success(format!("「{}」を追加しました。", upsert.term.term))
    } else {
        info!(
            "Overwrote term {} in folder {}",
            upsert.term.term, folder.name
        );
        Flash::info(format!("「{}」を上書き更新しました。", upsert.term.term))
    };
    Ok(redirect_with_flash(&term_list_url(folder.id), &flash))
}

pub async fn term_edit_form(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let term = match load_term(&state, path.into_inner())? {
        Ok(term) => term,
        Err(response) => return Ok(response),
    };
    let folder = match load_folder(&state, term.folder_id)? {
        Ok(folder) => folder,
        Err(response) => return Ok(response),
    };

    let action = format!("/terms/{}/edit/", term.id);
    let context = TermFormContext::new(
        &state.app_name,
        folder,
        "edit",
        action,
        TermSubmission::from_term(&term),
        TermFormErrors::default(),
    );
    render_page(&state, "term_form.html", context.to_value())
}

pub async fn term_edit(
    path: web::Path<i64>,
    form: web::Form<TermSubmission>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let term = match load_term(&state, path.into_inner())? {
        Ok(term) => term,
        Err(response) => return Ok(response),
    };
    let folder = match load_folder(&state, term.folder_id)? {
        Ok(folder) => folder,
        Err(response) => return Ok(response),
    };
    let submission = form.into_inner();

    let mut validation = validate_term(&submission);
    if let Ok(fields) = &validation {
        // A rename must not collide with another headword in the folder.
        let collides = match state
            .store
            .term_exists_in_folder(folder.id, &fields.term, Some(term.id))
        {
            Ok(collides) => collides,
            Err(err) => return store_failure(&state, "term collision check", err),
        };
        if collides {
            validation = Err(TermFormErrors {
                term: Some("この用語は既にこのフォルダに存在します。".to_string()),
                ..TermFormErrors::default()
            });
        }
    }

    let fields = match validation {
        Ok(fields) => fields,
        Err(errors) => {
            let action = format!("/terms/{}/edit/", term.id);
            let context =
                TermFormContext::new(&state.app_name, folder, "edit", action, submission, errors);
            return render_page(&state, "term_form.html", context.to_value());
        }
    };

    match state.store.update_term(term.id, &fields) {
        Ok(true) => {}
        Ok(false) => return not_found(&state),
        Err(err) => return store_failure(&state, "term update", err),
    }
    info!("Updated term {} (id {})", fields.term, term.id);

    let flash = Flash::success(format!("「{}」を更新しました。", fields.term));
    Ok(redirect_with_flash(&term_list_url(folder.id), &flash))
}

pub async fn term_delete_confirm(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let term = match load_term(&state, path.into_inner())? {
        Ok(term) => term,
        Err(response) => return Ok(response),
    };
    let folder = match load_folder(&state, term.folder_id)? {
        Ok(folder) => folder,
        Err(response) => return Ok(response),
    };
    let context = TermDeleteContext::new(&state.app_name, folder, term);
    render_page(&state, "term_delete.html", context.to_value())
}

pub async fn term_delete(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let term = match load_term(&state, path.into_inner())? {
        Ok(term) => term,
        Err(response) => return Ok(response),
    };

    if let Err(err) = state.store.delete_term(term.id) {
        return store_failure(&state, "term delete", err);
    }
    info!("Deleted term {} (id {})", term.term, term.id);

    let flash = Flash::warning(format!("「{}」を削除しました。", term.term));
    Ok(redirect_with_flash(&term_list_url(term.folder_id), &flash))
}

pub async fn term_toggle_status(
    path: web::Path<(i64, String)>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let (id, next_status) = path.into_inner();
    let term = match load_term(&state, id)? {
        Ok(term) => term,
        Err(response) => return Ok(response),
    };

    let status = match Status::parse(&next_status) {
        Some(status) => status,
        None => {
            let flash = Flash::error("不正な状態です。");
            return Ok(redirect_with_flash(&term_list_url(term.folder_id), &flash));
        }
    };

    if let Err(err) = state.store.set_term_status(term.id, status) {
        return store_failure(&state, "status toggle", err);
    }
    info!(
        "Set status of term {} (id {}) to {}",
        term.term,
        term.id,
        status.as_str()
    );

    let flash = Flash::success(format!("状態を「{}」に変更しました。", status.label()));
    Ok(redirect_with_flash(&term_list_url(term.folder_id), &flash))
}
