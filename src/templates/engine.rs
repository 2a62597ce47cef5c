// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Environment, Value, default_auto_escape_callback};

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(embedded_template_loader);
        env.add_filter("add_class", |existing: String, token: String| {
            super::merge_class(&existing, &token)
        });
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template_name)?;
        tmpl.render(context)
    }
}

/// Template loader for minijinja that loads from embedded sources
fn embedded_template_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
    let template_content = match name {
        "base.html" => Some(include_str!("../flashcards/templates/base.html")),

        // Folder pages
        "folder_list.html" => Some(include_str!("../flashcards/templates/folder_list.html")),
        "folder_create.html" => Some(include_str!("../flashcards/templates/folder_create.html")),
        "folder_delete.html" => Some(include_str!("../flashcards/templates/folder_delete.html")),

        // Term pages
        "term_list.html" => Some(include_str!("../flashcards/templates/term_list.html")),
        "term_form.html" => Some(include_str!("../flashcards/templates/term_form.html")),
        "term_delete.html" => Some(include_str!("../flashcards/templates/term_delete.html")),

        // Error pages
        "error_404.html" => Some(include_str!("../flashcards/templates/error_404.html")),
        "error_500.html" => Some(include_str!("../flashcards/templates/error_500.html")),

        _ => None,
    };

    Ok(template_content.map(|s| s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn renders_error_page_with_escaping() {
        let engine = MiniJinjaEngine::new();
        let html = engine
            .render("error_404.html", context! { app_name => "<Wordbook>" })
            .unwrap();
        assert!(html.contains("&lt;Wordbook&gt;"));
        assert!(html.contains("404"));
    }

    #[test]
    fn add_class_filter_is_registered() {
        let mut env = Environment::new();
        env.add_filter("add_class", |existing: String, token: String| {
            crate::templates::merge_class(&existing, &token)
        });
        let rendered = env
            .render_str("{{ 'input' | add_class('is-danger') }}", context! {})
            .unwrap();
        assert_eq!(rendered, "input is-danger");
    }

    #[test]
    fn unknown_template_is_an_error() {
        let engine = MiniJinjaEngine::new();
        assert!(engine.render("missing.html", context! {}).is_err());
    }
}
