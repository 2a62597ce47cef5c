// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{Status, Store, StoreError, now_rfc3339};
use rusqlite::{OptionalExtension, Row, params};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Term {
    pub id: i64,
    pub folder_id: i64,
    pub term: String,
    pub reading: String,
    pub meaning: String,
    pub status: Status,
    pub updated_at: String,
}

/// Validated field values for a term write. `status: None` means the
/// submission did not carry a status: inserts default it to `new`, the
/// upsert-overwrite path keeps the existing value.
#[derive(Debug, Clone)]
pub struct TermFields {
    pub term: String,
    pub reading: String,
    pub meaning: String,
    pub status: Option<Status>,
}

#[derive(Debug)]
pub struct TermUpsert {
    pub term: Term,
    pub created: bool,
}

fn row_to_term(row: &Row) -> rusqlite::Result<Term> {
    let status: String = row.get(5)?;
    Ok(Term {
        id: row.get(0)?,
        folder_id: row.get(1)?,
        term: row.get(2)?,
        reading: row.get(3)?,
        meaning: row.get(4)?,
        status: Status::parse(&status).unwrap_or(Status::New),
        updated_at: row.get(6)?,
    })
}

const TERM_COLUMNS: &str = "id, folder_id, term, reading, meaning, status, updated_at";

impl Store {
    /// Terms of a folder ordered by headword ascending, optionally narrowed
    /// to one status.
    pub fn list_terms(
        &self,
        folder_id: i64,
        status: Option<Status>,
    ) -> Result<Vec<Term>, StoreError> {
        let conn = self.conn();
        let terms = match status {
            Some(status) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {TERM_COLUMNS} FROM terms
                     WHERE folder_id = ?1 AND status = ?2
                     ORDER BY term ASC"
                ))?;
                stmt.query_map(params![folder_id, status.as_str()], row_to_term)?
                    .collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {TERM_COLUMNS} FROM terms WHERE folder_id = ?1 ORDER BY term ASC"
                ))?;
                stmt.query_map(params![folder_id], row_to_term)?
                    .collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(terms)
    }

    pub fn get_term(&self, id: i64) -> Result<Option<Term>, StoreError> {
        let conn = self.conn();
        let term = conn
            .query_row(
                &format!("SELECT {TERM_COLUMNS} FROM terms WHERE id = ?1"),
                params![id],
                row_to_term,
            )
            .optional()?;
        Ok(term)
    }

    pub fn count_terms(&self, folder_id: i64) -> Result<i64, StoreError> {
        let conn = self.conn();
        let count = conn.query_row(
            "SELECT COUNT(*) FROM terms WHERE folder_id = ?1",
            params![folder_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Insert-or-overwrite keyed by the (folder, term) uniqueness constraint.
    ///
    /// The conflict branch runs inside the same statement, so two identical
    /// submissions racing each other cannot create a duplicate row. On
    /// overwrite, a field submitted empty keeps its stored value; an absent
    /// status keeps the stored status.
    pub fn upsert_term(
        &self,
        folder_id: i64,
        fields: &TermFields,
    ) -> Result<TermUpsert, StoreError> {
        let conn = self.conn();
        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM terms WHERE folder_id = ?1 AND term = ?2",
                params![folder_id, fields.term],
                |row| row.get(0),
            )
            .optional()?;

        let insert_status = fields.status.unwrap_or(Status::New);
        conn.execute(
            "INSERT INTO terms (folder_id, term, reading, meaning, status, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(folder_id, term) DO UPDATE SET
                 reading = CASE WHEN excluded.reading = '' THEN terms.reading
                                ELSE excluded.reading END,
                 meaning = CASE WHEN excluded.meaning = '' THEN terms.meaning
                                ELSE excluded.meaning END,
                 status = CASE WHEN ?7 THEN excluded.status ELSE terms.status END,
                 updated_at = excluded.updated_at",
            params![
                folder_id,
                fields.term,
                fields.reading,
                fields.meaning,
                insert_status.as_str(),
                now_rfc3339(),
                fields.status.is_some(),
            ],
        )?;

        let term = conn.query_row(
            &format!("SELECT {TERM_COLUMNS} FROM terms WHERE folder_id = ?1 AND term = ?2"),
            params![folder_id, fields.term],
            row_to_term,
        )?;
        Ok(TermUpsert {
            term,
            created: existing.is_none(),
        })
    }

    /// Full field replacement for the edit path. Returns false when the term
    /// does not exist.
    pub fn update_term(&self, id: i64, fields: &TermFields) -> Result<bool, StoreError> {
        let conn = self.conn();
        let updated = conn.execute(
            "UPDATE terms
             SET term = ?1, reading = ?2, meaning = ?3, status = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                fields.term,
                fields.reading,
                fields.meaning,
                fields.status.unwrap_or(Status::New).as_str(),
                now_rfc3339(),
                id,
            ],
        )?;
        Ok(updated > 0)
    }

    /// Status-only update; refreshes updated_at like every other write.
    pub fn set_term_status(&self, id: i64, status: Status) -> Result<bool, StoreError> {
        let conn = self.conn();
        let updated = conn.execute(
            "UPDATE terms SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status.as_str(), now_rfc3339(), id],
        )?;
        Ok(updated > 0)
    }

    pub fn delete_term(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.conn();
        let deleted = conn.execute("DELETE FROM terms WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    /// Whether another term in the folder already uses this headword. Used by
    /// the edit form to keep a rename from colliding with an existing pair.
    pub fn term_exists_in_folder(
        &self,
        folder_id: i64,
        term: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, StoreError> {
        let conn = self.conn();
        let id: Option<i64> = conn
            .query_row(
                "SELECT id FROM terms WHERE folder_id = ?1 AND term = ?2",
                params![folder_id, term],
                |row| row.get(0),
            )
            .optional()?;
        Ok(match (id, exclude_id) {
            (Some(found), Some(excluded)) => found != excluded,
            (Some(_), None) => true,
            (None, _) => false,
        })
    }
}
