// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::templates::{ErrorPageContext, TemplateEngine, render_minijinja_template};
use actix_web::{HttpResponse, Result};

#[derive(Clone)]
pub struct ErrorRenderer {
    app_name: String,
}

impl ErrorRenderer {
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

pub fn serve_404(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
) -> Result<HttpResponse> {
    let context = ErrorPageContext::new(renderer.app_name()).to_value();

    let html = match template_engine {
        Some(engine) => match render_minijinja_template(engine, "error_404.html", context) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to render 404 error template: {}", e);
                fallback_404_html(renderer.app_name())
            }
        },
        None => fallback_404_html(renderer.app_name()),
    };

    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .body(html))
}

pub fn serve_500(
    renderer: &ErrorRenderer,
    template_engine: Option<&dyn TemplateEngine>,
) -> Result<HttpResponse> {
    let context = ErrorPageContext::new(renderer.app_name()).to_value();

    let html = match template_engine {
        Some(engine) => match render_minijinja_template(engine, "error_500.html", context) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to render 500 error template: {}", e);
                fallback_500_html(renderer.app_name())
            }
        },
        None => fallback_500_html(renderer.app_name()),
    };

    Ok(HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .body(html))
}

fn fallback_404_html(app_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>404 - Page Not Found | {}</title></head>
<body><h1>404 - Page Not Found</h1></body></html>"#,
        app_name
    )
}

fn fallback_500_html(app_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>500 - Internal Server Error | {}</title></head>
<body><h1>500 - Internal Server Error</h1></body></html>"#,
        app_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn fallback_404_without_engine() {
        let renderer = ErrorRenderer::new("Wordbook".to_string());
        let response = serve_404(&renderer, None).unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn fallback_500_without_engine() {
        let renderer = ErrorRenderer::new("Wordbook".to_string());
        let response = serve_500(&renderer, None).unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
