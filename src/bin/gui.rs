// src/bin/gui.rs
use std::path::Path;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use chainscrape::config::consts::{LOG_FILE, STORE_DIR};
use chainscrape::config::state::AppState;
use chainscrape::engine::crawler::CrawlEngine;
use chainscrape::{gui, store};

fn main() -> ExitCode {
    init_logging();

    let settings = store::load_settings();
    let state = AppState {
        options: settings.options,
        gui: settings.gui,
    };
    let crawl = Arc::new(Mutex::new(settings.crawl));
    let engine = Arc::new(CrawlEngine::new(crawl.clone()));

    match gui::run(state, crawl, engine) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("GUI exited with error: {e}");
            eprintln!("chainscrape: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    use simplelog::{
        ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
        WriteLogger,
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    let _ = std::fs::create_dir_all(STORE_DIR);
    match std::fs::File::create(Path::new(STORE_DIR).join(LOG_FILE)) {
        Ok(file) => loggers.push(WriteLogger::new(log::LevelFilter::Debug, config, file)),
        Err(e) => eprintln!("warning: could not create log file: {e}"),
    }

    let _ = CombinedLogger::init(loggers);
}
