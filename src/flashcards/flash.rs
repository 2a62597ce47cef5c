// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Transient one-shot messages shown after a redirect.
//!
//! The message travels as an explicit payload in the redirect's query string
//! instead of process-wide session state, so nothing leaks between requests:
//! the mutating handler encodes it into the Location header and the next page
//! render decodes it from its own query parameters.

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Info,
    Warning,
    Error,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Info => "info",
            FlashKind::Warning => "warning",
            FlashKind::Error => "error",
        }
    }

    fn parse(value: &str) -> Option<FlashKind> {
        match value {
            "success" => Some(FlashKind::Success),
            "info" => Some(FlashKind::Info),
            "warning" => Some(FlashKind::Warning),
            "error" => Some(FlashKind::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Rebuild a flash from the already-decoded query parameters of the page
    /// a redirect landed on. An unknown kind degrades to info rather than
    /// dropping the message.
    pub fn from_query(message: Option<&str>, kind: Option<&str>) -> Option<Flash> {
        let message = message?.trim();
        if message.is_empty() {
            return None;
        }
        Some(Flash {
            kind: kind.and_then(FlashKind::parse).unwrap_or(FlashKind::Info),
            message: message.to_string(),
        })
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header(("Location", location))
        .finish()
}

pub fn redirect_with_flash(location: &str, flash: &Flash) -> HttpResponse {
    let separator = if location.contains('?') { '&' } else { '?' };
    let target = format!(
        "{}{}flash={}&flash_kind={}",
        location,
        separator,
        urlencoding::encode(&flash.message),
        flash.kind.as_str()
    );
    HttpResponse::Found()
        .append_header(("Location", target))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn from_query_requires_a_message() {
        assert!(Flash::from_query(None, Some("success")).is_none());
        assert!(Flash::from_query(Some("   "), Some("success")).is_none());
    }

    #[test]
    fn from_query_defaults_unknown_kind_to_info() {
        let flash = Flash::from_query(Some("done"), Some("loud")).unwrap();
        assert_eq!(flash.kind, FlashKind::Info);
        let flash = Flash::from_query(Some("done"), None).unwrap();
        assert_eq!(flash.kind, FlashKind::Info);
    }

    #[test]
    fn redirect_encodes_message_into_location() {
        let flash = Flash::success("フォルダ「Kanji」を作成しました。");
        let response = redirect_with_flash("/folders/", &flash);
        assert_eq!(response.status(), StatusCode::FOUND);

        let location = response
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(location.starts_with("/folders/?flash="));
        assert!(location.ends_with("&flash_kind=success"));
        assert!(!location.contains('「'));
    }

    #[test]
    fn redirect_appends_to_existing_query() {
        let flash = Flash::info("ok");
        let response = redirect_with_flash("/folders/1/terms/?status=new", &flash);
        let location = response
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(location.starts_with("/folders/1/terms/?status=new&flash="));
    }
}
