// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{Store, StoreError, now_rfc3339};
use rusqlite::{OptionalExtension, Row, params};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

/// A folder row annotated with the number of terms it owns, for the listing page.
#[derive(Debug, Clone, Serialize)]
pub struct FolderSummary {
    pub id: i64,
    pub name: String,
    pub term_count: i64,
}

fn row_to_folder(row: &Row) -> rusqlite::Result<Folder> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

impl Store {
    /// Folders with term counts, ordered by name ascending.
    pub fn list_folders(&self) -> Result<Vec<FolderSummary>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT f.id, f.name, COUNT(t.id)
             FROM folders f
             LEFT JOIN terms t ON t.folder_id = f.id
             GROUP BY f.id
             ORDER BY f.name ASC",
        )?;
        let folders = stmt
            .query_map([], |row| {
                Ok(FolderSummary {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    term_count: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(folders)
    }

    pub fn get_folder(&self, id: i64) -> Result<Option<Folder>, StoreError> {
        let conn = self.conn();
        let folder = conn
            .query_row(
                "SELECT id, name, created_at FROM folders WHERE id = ?1",
                params![id],
                row_to_folder,
            )
            .optional()?;
        Ok(folder)
    }

    /// Idempotent create: a conflicting insert falls back to fetching the
    /// existing row, so concurrent identical submissions cannot duplicate
    /// a folder or surface a constraint error.
    pub fn get_or_create_folder(&self, name: &str) -> Result<Folder, StoreError> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO folders (name, created_at) VALUES (?1, ?2)
             ON CONFLICT(name) DO NOTHING",
            params![name, now_rfc3339()],
        )?;
        let folder = conn.query_row(
            "SELECT id, name, created_at FROM folders WHERE name = ?1",
            params![name],
            row_to_folder,
        )?;
        Ok(folder)
    }

    /// Returns false when no folder had that id. Owned terms go with the
    /// folder via ON DELETE CASCADE.
    pub fn delete_folder(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.conn();
        let deleted = conn.execute("DELETE FROM folders WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::store::{Status, Store, TermFields};
    use crate::util::test_fixtures::TestFixtureRoot;

    fn open_store(prefix: &str) -> (TestFixtureRoot, Store) {
        let fixture = TestFixtureRoot::new_unique(prefix).unwrap();
        let store = Store::open(&fixture.db_path()).unwrap();
        (fixture, store)
    }

    #[test]
    fn get_or_create_reuses_existing_row() {
        let (_fixture, store) = open_store("folders-idempotent");
        let first = store.get_or_create_folder("Kanji").unwrap();
        let second = store.get_or_create_folder("Kanji").unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(store.list_folders().unwrap().len(), 1);
    }

    #[test]
    fn folder_names_are_case_sensitive() {
        let (_fixture, store) = open_store("folders-case");
        let lower = store.get_or_create_folder("kanji").unwrap();
        let upper = store.get_or_create_folder("Kanji").unwrap();
        assert_ne!(lower.id, upper.id);
    }

    #[test]
    fn listing_is_ordered_by_name_with_counts() {
        let (_fixture, store) = open_store("folders-order");
        let verbs = store.get_or_create_folder("Verbs").unwrap();
        store.get_or_create_folder("Adjectives").unwrap();
        store
            .upsert_term(
                verbs.id,
                &TermFields {
                    term: "走る".to_string(),
                    reading: "はしる".to_string(),
                    meaning: "to run".to_string(),
                    status: Some(Status::New),
                },
            )
            .unwrap();

        let folders = store.list_folders().unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].name, "Adjectives");
        assert_eq!(folders[0].term_count, 0);
        assert_eq!(folders[1].name, "Verbs");
        assert_eq!(folders[1].term_count, 1);
    }

    #[test]
    fn delete_cascades_to_terms() {
        let (_fixture, store) = open_store("folders-cascade");
        let folder = store.get_or_create_folder("Kanji").unwrap();
        let upsert = store
            .upsert_term(
                folder.id,
                &TermFields {
                    term: "水".to_string(),
                    reading: "みず".to_string(),
                    meaning: "water".to_string(),
                    status: Some(Status::New),
                },
            )
            .unwrap();

        assert!(store.delete_folder(folder.id).unwrap());
        assert!(store.get_folder(folder.id).unwrap().is_none());
        assert!(store.get_term(upsert.term.id).unwrap().is_none());
    }

    #[test]
    fn delete_missing_folder_reports_false() {
        let (_fixture, store) = open_store("folders-missing");
        assert!(!store.delete_folder(999).unwrap());
    }
}
