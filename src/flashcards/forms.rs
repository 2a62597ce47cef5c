// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::store::{Status, Term, TermFields};
use serde::{Deserialize, Serialize};

pub const MAX_FIELD_CHARS: usize = 100;

/// Raw term form fields as submitted. Also reused as the value set handed
/// back to the template when the form re-renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermSubmission {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub status: String,
}

impl TermSubmission {
    pub fn from_term(term: &Term) -> Self {
        Self {
            term: term.term.clone(),
            reading: term.reading.clone(),
            meaning: term.meaning.clone(),
            status: term.status.as_str().to_string(),
        }
    }
}

/// Field-level validation messages; `None` means the field passed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TermFormErrors {
    pub term: Option<String>,
    pub reading: Option<String>,
    pub status: Option<String>,
}

impl TermFormErrors {
    pub fn is_empty(&self) -> bool {
        self.term.is_none() && self.reading.is_none() && self.status.is_none()
    }
}

/// Validate a term submission into storable field values.
///
/// `term` is required and length-bounded, `reading` optional with the same
/// bound, `meaning` unbounded, `status` must be one of the enumerated values
/// when present. An absent/empty status stays `None` so the storage layer can
/// apply its default-on-insert / keep-on-overwrite semantics.
pub fn validate_term(submission: &TermSubmission) -> Result<TermFields, TermFormErrors> {
    let mut errors = TermFormErrors::default();

    let term = submission.term.trim();
    if term.is_empty() {
        errors.term = Some("用語を入力してください。".to_string());
    } else if term.chars().count() > MAX_FIELD_CHARS {
        errors.term = Some(format!(
            "用語は{}文字以内で入力してください。",
            MAX_FIELD_CHARS
        ));
    }

    let reading = submission.reading.trim();
    if reading.chars().count() > MAX_FIELD_CHARS {
        errors.reading = Some(format!(
            "読みは{}文字以内で入力してください。",
            MAX_FIELD_CHARS
        ));
    }

    let status = match submission.status.trim() {
        "" => None,
        value => match Status::parse(value) {
            Some(status) => Some(status),
            None => {
                errors.status = Some("不正な状態です。".to_string());
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(TermFields {
        term: term.to_string(),
        reading: reading.to_string(),
        meaning: submission.meaning.clone(),
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(term: &str, reading: &str, meaning: &str, status: &str) -> TermSubmission {
        TermSubmission {
            term: term.to_string(),
            reading: reading.to_string(),
            meaning: meaning.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn accepts_a_full_submission() {
        let fields = validate_term(&submission("水", "みず", "water", "learning")).unwrap();
        assert_eq!(fields.term, "水");
        assert_eq!(fields.reading, "みず");
        assert_eq!(fields.meaning, "water");
        assert_eq!(fields.status, Some(Status::Learning));
    }

    #[test]
    fn term_is_required() {
        let errors = validate_term(&submission("", "みず", "", "new")).unwrap_err();
        assert!(errors.term.is_some());
        let errors = validate_term(&submission("   ", "", "", "")).unwrap_err();
        assert!(errors.term.is_some());
    }

    #[test]
    fn term_and_reading_are_length_bounded() {
        let long = "あ".repeat(MAX_FIELD_CHARS + 1);
        let errors = validate_term(&submission(&long, "", "", "")).unwrap_err();
        assert!(errors.term.is_some());

        let errors = validate_term(&submission("水", &long, "", "")).unwrap_err();
        assert!(errors.reading.is_some());

        let at_limit = "あ".repeat(MAX_FIELD_CHARS);
        assert!(validate_term(&submission(&at_limit, &at_limit, "", "")).is_ok());
    }

    #[test]
    fn meaning_is_unbounded_and_kept_verbatim() {
        let meaning = "line one\nline two\n".repeat(200);
        let fields = validate_term(&submission("水", "", &meaning, "")).unwrap();
        assert_eq!(fields.meaning, meaning);
    }

    #[test]
    fn absent_status_stays_unset() {
        let fields = validate_term(&submission("水", "", "", "")).unwrap();
        assert_eq!(fields.status, None);
    }

    #[test]
    fn unknown_status_is_a_field_error() {
        let errors = validate_term(&submission("水", "", "", "archived")).unwrap_err();
        assert!(errors.status.is_some());
        assert!(errors.term.is_none());
    }
}
