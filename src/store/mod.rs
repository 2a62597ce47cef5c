// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

mod folders;
mod terms;

pub use folders::{Folder, FolderSummary};
pub use terms::{Term, TermFields, TermUpsert};

#[derive(Debug)]
pub enum StoreError {
    OpenError(String),
    Sqlite(rusqlite::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::OpenError(msg) => write!(f, "Store open error: {}", msg),
            StoreError::Sqlite(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Sqlite(err)
    }
}

/// Learning state of a term. Stored as lowercase text in SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    New,
    Learning,
    Mastered,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::New, Status::Learning, Status::Mastered];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::Learning => "learning",
            Status::Mastered => "mastered",
        }
    }

    /// Human-facing label shown in listings and flash messages.
    pub fn label(&self) -> &'static str {
        match self {
            Status::New => "未学習",
            Status::Learning => "学習中",
            Status::Mastered => "習得済み",
        }
    }

    pub fn parse(value: &str) -> Option<Status> {
        match value {
            "new" => Some(Status::New),
            "learning" => Some(Status::Learning),
            "mastered" => Some(Status::Mastered),
            _ => None,
        }
    }
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS folders (
    id         INTEGER PRIMARY KEY,
    name       TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS terms (
    id         INTEGER PRIMARY KEY,
    folder_id  INTEGER NOT NULL REFERENCES folders(id) ON DELETE CASCADE,
    term       TEXT NOT NULL,
    reading    TEXT NOT NULL DEFAULT '',
    meaning    TEXT NOT NULL DEFAULT '',
    status     TEXT NOT NULL DEFAULT 'new',
    updated_at TEXT NOT NULL,
    UNIQUE (folder_id, term)
);
";

/// SQLite-backed storage for folders and terms.
///
/// A single connection guarded by a mutex serializes all statements, so every
/// operation the handlers perform is atomic. The uniqueness invariants
/// (folder name, folder/term pair) live in the schema, not in application
/// logic; the upsert operations absorb conflicts instead of surfacing them.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(err) = std::fs::create_dir_all(parent)
        {
            return Err(StoreError::OpenError(format!(
                "Failed to create database directory {}: {}",
                parent.display(),
                err
            )));
        }

        let conn = Connection::open(path).map_err(|err| {
            StoreError::OpenError(format!(
                "Failed to open database {}: {}",
                path.display(),
                err
            ))
        })?;

        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn conn(&self) -> MutexGuard<'_, Connection> {
        match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_fixtures::TestFixtureRoot;

    #[test]
    fn status_parse_round_trips() {
        for status in Status::ALL {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::parse("done"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn open_creates_schema_and_parent_dirs() {
        let fixture = TestFixtureRoot::new_unique("store-open").unwrap();
        let path = fixture.path().join("nested").join("wordbook.db");
        let store = Store::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.list_folders().unwrap().is_empty());
    }
}
