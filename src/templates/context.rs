// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::flashcards::flash::Flash;
use crate::flashcards::forms::{TermFormErrors, TermSubmission};
use crate::store::{Folder, FolderSummary, Status, Term};
use minijinja::{Value, context};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct StatusOption {
    value: &'static str,
    label: &'static str,
}

fn status_options() -> Vec<StatusOption> {
    Status::ALL
        .iter()
        .map(|status| StatusOption {
            value: status.as_str(),
            label: status.label(),
        })
        .collect()
}

/// A term row prepared for display: the stored status plus its label.
#[derive(Debug, Clone, Serialize)]
struct TermRow {
    id: i64,
    term: String,
    reading: String,
    meaning: String,
    status: &'static str,
    status_label: &'static str,
    updated_at: String,
}

impl TermRow {
    fn from_term(term: &Term) -> Self {
        Self {
            id: term.id,
            term: term.term.clone(),
            reading: term.reading.clone(),
            meaning: term.meaning.clone(),
            status: term.status.as_str(),
            status_label: term.status.label(),
            updated_at: term.updated_at.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    app_name: String,
}

impl ErrorPageContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name
        }
    }
}

#[derive(Debug, Clone)]
pub struct FolderListContext {
    app_name: String,
    folders: Vec<FolderSummary>,
    flash: Option<Flash>,
}

impl FolderListContext {
    pub fn new(app_name: &str, folders: Vec<FolderSummary>, flash: Option<Flash>) -> Self {
        Self {
            app_name: app_name.to_string(),
            folders,
            flash,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            folders => Value::from_serialize(&self.folders),
            flash => Value::from_serialize(&self.flash)
        }
    }
}

/// Folder create form; `name` carries the rejected submission back into the
/// input on a precondition failure.
#[derive(Debug, Clone)]
pub struct FolderFormContext {
    app_name: String,
    name: String,
    flash: Option<Flash>,
}

impl FolderFormContext {
    pub fn new(app_name: &str, name: &str, flash: Option<Flash>) -> Self {
        Self {
            app_name: app_name.to_string(),
            name: name.to_string(),
            flash,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            name => &self.name,
            flash => Value::from_serialize(&self.flash)
        }
    }
}

#[derive(Debug, Clone)]
pub struct FolderDeleteContext {
    app_name: String,
    folder: Folder,
}

impl FolderDeleteContext {
    pub fn new(app_name: &str, folder: Folder) -> Self {
        Self {
            app_name: app_name.to_string(),
            folder,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            folder => Value::from_serialize(&self.folder)
        }
    }
}

#[derive(Debug, Clone)]
pub struct TermListContext {
    app_name: String,
    folder: Folder,
    terms: Vec<Term>,
    status: Option<Status>,
    flash: Option<Flash>,
}

impl TermListContext {
    pub fn new(
        app_name: &str,
        folder: Folder,
        terms: Vec<Term>,
        status: Option<Status>,
        flash: Option<Flash>,
    ) -> Self {
        Self {
            app_name: app_name.to_string(),
            folder,
            terms,
            status,
            flash,
        }
    }

    pub fn to_value(&self) -> Value {
        let rows: Vec<TermRow> = self.terms.iter().map(TermRow::from_term).collect();
        context! {
            app_name => &self.app_name,
            folder => Value::from_serialize(&self.folder),
            terms => Value::from_serialize(&rows),
            status => self.status.map(|s| s.as_str()),
            statuses => Value::from_serialize(&status_options()),
            flash => Value::from_serialize(&self.flash)
        }
    }
}

/// Shared by the create and edit forms; `mode` selects the headline and
/// submit-button wording.
#[derive(Debug, Clone)]
pub struct TermFormContext {
    app_name: String,
    folder: Folder,
    mode: &'static str,
    action: String,
    values: TermSubmission,
    errors: TermFormErrors,
}

impl TermFormContext {
    pub fn new(
        app_name: &str,
        folder: Folder,
        mode: &'static str,
        action: String,
        values: TermSubmission,
        errors: TermFormErrors,
    ) -> Self {
        Self {
            app_name: app_name.to_string(),
            folder,
            mode,
            action,
            values,
            errors,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            folder => Value::from_serialize(&self.folder),
            mode => self.mode,
            action => &self.action,
            values => Value::from_serialize(&self.values),
            errors => Value::from_serialize(&self.errors),
            statuses => Value::from_serialize(&status_options())
        }
    }
}

#[derive(Debug, Clone)]
pub struct TermDeleteContext {
    app_name: String,
    folder: Folder,
    term: Term,
}

impl TermDeleteContext {
    pub fn new(app_name: &str, folder: Folder, term: Term) -> Self {
        Self {
            app_name: app_name.to_string(),
            folder,
            term,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            folder => Value::from_serialize(&self.folder),
            term => Value::from_serialize(&self.term)
        }
    }
}
