// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::error::ErrorRenderer;
use crate::store::Store;
use crate::templates::{MiniJinjaEngine, TemplateEngine};

pub struct AppState {
    pub app_name: String,
    pub store: Arc<Store>,
    pub templates: Arc<dyn TemplateEngine>,
    pub error_renderer: ErrorRenderer,
}

impl AppState {
    pub fn new(app_name: &str, store: Arc<Store>) -> Self {
        Self {
            app_name: app_name.to_string(),
            store,
            templates: Arc::new(MiniJinjaEngine::new()),
            error_renderer: ErrorRenderer::new(app_name.to_string()),
        }
    }
}
