// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::Value;

mod context;
mod engine;

pub use context::{
    ErrorPageContext, FolderDeleteContext, FolderFormContext, FolderListContext,
    TermDeleteContext, TermFormContext, TermListContext,
};
pub use engine::{MiniJinjaEngine, TemplateEngine};

/// Merge a CSS class token into an existing class attribute value.
///
/// Returns the space-joined union of what was already there and the new
/// token, trimmed. Exposed to templates as the `add_class` filter so widgets
/// can pick up extra classes (error highlighting, layout variants) without
/// the template knowing the base class list.
pub fn merge_class(existing: &str, token: &str) -> String {
    format!("{} {}", existing.trim(), token.trim())
        .trim()
        .to_string()
}

/// Render a minijinja template with the given context
pub fn render_minijinja_template(
    engine: &dyn TemplateEngine,
    template_name: &str,
    context: Value,
) -> Result<String, minijinja::Error> {
    engine.render(template_name, context)
}
