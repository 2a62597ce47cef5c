// This file is part of the product Wordbook.
// SPDX-FileCopyrightText: 2025-2026 Wordbook Authors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{LevelFilter, info};
use std::path::PathBuf;
use std::sync::Arc;

use wordbook::app_state::AppState;
use wordbook::config::{self, ValidatedConfig};
use wordbook::flashcards;
use wordbook::store::Store;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

struct ParsedArgs {
    runtime_root: PathBuf,
    show_help: bool,
}

fn parse_args() -> Result<ParsedArgs, String> {
    let mut runtime_root = PathBuf::from(".");
    let mut show_help = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-C" => {
                let value = args
                    .next()
                    .ok_or_else(|| "-C requires a directory argument".to_string())?;
                runtime_root = PathBuf::from(value);
            }
            "-h" | "--help" => show_help = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(ParsedArgs {
        runtime_root,
        show_help,
    })
}

fn run() -> i32 {
    let parsed_args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    if parsed_args.show_help {
        println!("wordbook - personal vocabulary flashcard manager");
        println!();
        println!("Usage: wordbook [-C <root>]");
        println!("  -C <root>   runtime directory holding config.yaml and the database");
        return 0;
    }

    let (config, created_config) = match config::load_or_create(&parsed_args.runtime_root) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("❌ Configuration error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    let log_level = parse_log_level(&config.logging.level);
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if created_config {
        info!(
            "Created default {} in {}",
            config::CONFIG_FILE_NAME,
            parsed_args.runtime_root.display()
        );
    }

    let db_path = config.database_path(&parsed_args.runtime_root);
    let store = match Store::open(&db_path) {
        Ok(store) => Arc::new(store),
        Err(error) => {
            eprintln!("❌ Failed to open database: {}", error);
            return 1;
        }
    };
    info!("Database ready at {}", db_path.display());

    match System::new().block_on(serve(config, store)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server error: {}", error);
            1
        }
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

async fn serve(config: ValidatedConfig, store: Arc<Store>) -> std::io::Result<()> {
    let app_state = Arc::new(AppState::new(&config.app.name, store));

    info!("Starting {}", config.app.name);
    info!(
        "Listening on http://{}:{} ({} workers)",
        config.server.host, config.server.port, config.server.workers
    );

    let bind_address = (config.server.host.clone(), config.server.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(app_state.clone()))
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
            ))
            .configure(flashcards::configure)
    })
    .workers(config.server.workers)
    .bind(bind_address)?
    .run()
    .await
}
