// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::flash::{Flash, redirect, redirect_with_flash};
use super::{not_found, render_page, store_failure};
use crate::app_state::AppState;
use crate::templates::{FolderDeleteContext, FolderFormContext, FolderListContext};
use actix_web::{HttpResponse, Result, web};
use log::info;
use serde::Deserialize;

/// Query parameters every listing page accepts: the flash payload carried
/// over from a redirect.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub flash: Option<String>,
    pub flash_kind: Option<String>,
}

impl PageQuery {
    pub fn flash(&self) -> Option<Flash> {
        Flash::from_query(self.flash.as_deref(), self.flash_kind.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct FolderCreateForm {
    #[serde(default)]
    pub name: String,
}

pub async fn index() -> Result<HttpResponse> {
    Ok(redirect("/folders/"))
}

pub async fn folder_list(
    query: web::Query<PageQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let folders = match state.store.list_folders() {
        Ok(folders) => folders,
        Err(err) => return store_failure(&state, "folder listing", err),
    };
    let context = FolderListContext::new(&state.app_name, folders, query.flash());
    render_page(&state, "folder_list.html", context.to_value())
}

pub async fn folder_create_form(state: web::Data<AppState>) -> Result<HttpResponse> {
    let context = FolderFormContext::new(&state.app_name, "", None);
    render_page(&state, "folder_create.html", context.to_value())
}

pub async fn folder_create(
    form: web::Form<FolderCreateForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let name = form.name.trim();
    if name.is_empty() {
        let flash = Flash::error("フォルダ名を入力してください。");
        let context = FolderFormContext::new(&state.app_name, "", Some(flash));
        return render_page(&state, "folder_create.html", context.to_value());
    }

    let folder = match state.store.get_or_create_folder(name) {
        Ok(folder) => folder,
        Err(err) => return store_failure(&state, "folder create", err),
    };
    info!("Folder ready: {} (id {})", folder.name, folder.id);

    let flash = Flash::success(format!("フォルダ「{}」を作成しました。", folder.name));
    Ok(redirect_with_flash("/folders/", &flash))
}

pub async fn folder_delete_confirm(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let folder = match state.store.get_folder(path.into_inner()) {
        Ok(Some(folder)) => folder,
        Ok(None) => return not_found(&state),
        Err(err) => return store_failure(&state, "folder lookup", err),
    };
    let context = FolderDeleteContext::new(&state.app_name, folder);
    render_page(&state, "folder_delete.html", context.to_value())
}

pub async fn folder_delete(
    path: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let folder = match state.store.get_folder(id) {
        Ok(Some(folder)) => folder,
        Ok(None) => return not_found(&state),
        Err(err) => return store_failure(&state, "folder lookup", err),
    };

    if let Err(err) = state.store.delete_folder(folder.id) {
        return store_failure(&state, "folder delete", err);
    }
    info!("Deleted folder: {} (id {})", folder.name, folder.id);

    let flash = Flash::warning(format!("フォルダ「{}」を削除しました。", folder.name));
    Ok(redirect_with_flash("/folders/", &flash))
}
