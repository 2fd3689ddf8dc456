// SPDX-License-Identifier: MPL-2.0
use carousel_lens::config::{self, Config};
use carousel_lens::error::Result;
use carousel_lens::image_navigation::ImageSequence;
use carousel_lens::script::{self, Command};
use carousel_lens::ui::viewer::{ViewerEnvironment, ViewerSession, ViewerState};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Instant;

const USAGE: &str = "usage: carousel_lens [--start N] [--config PATH] IMAGE...";

/// Headless host: resources are only logged.
struct ConsoleEnvironment;

impl ViewerEnvironment for ConsoleEnvironment {
    fn lock_scroll(&self) {
        log::debug!("Scroll locked");
    }

    fn unlock_scroll(&self) {
        log::debug!("Scroll unlocked");
    }

    fn attach_keyboard_listener(&self) {
        log::debug!("Keyboard listener attached");
    }

    fn detach_keyboard_listener(&self) {
        log::debug!("Keyboard listener detached");
    }
}

struct Flags {
    start: usize,
    config_path: Option<PathBuf>,
    images: Vec<String>,
}

fn parse_flags() -> std::result::Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let start = args.opt_value_from_str("--start")?.unwrap_or(0);
    let config_path = args.opt_value_from_str("--config")?;
    let images = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();
    Ok(Flags {
        start,
        config_path,
        images,
    })
}

fn print_state(state: ViewerState) {
    println!(
        "{} {:.3} {:.1} {:.1}",
        state.current_index, state.scale, state.translate_x, state.translate_y
    );
}

fn run(flags: Flags) -> Result<()> {
    let config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load settings, using defaults: {}", e);
            Config::default()
        }),
    };

    let images = ImageSequence::new(flags.images)?;
    let mut session = ViewerSession::open(
        Rc::new(ConsoleEnvironment),
        images,
        flags.start,
        &config,
        || log::info!("Close requested"),
    );
    print_state(session.state());

    let origin = Instant::now();
    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        match script::parse_line(&line, origin) {
            Ok(Some(Command::Send(message))) => {
                session.handle(message);
                print_state(session.state());
            }
            Ok(Some(Command::PrintState)) => print_state(session.state()),
            Ok(None) => {}
            Err(e) => log::warn!("Line {}: {}", number + 1, e),
        }

        if !session.is_open() {
            break;
        }
    }

    Ok(())
}

/// Info by default; a `RUST_LOG` value replaces it.
fn logger_builder(env_filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }
    builder
}

fn main() -> ExitCode {
    let env_filters = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    logger_builder(env_filters.as_deref()).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            ExitCode::FAILURE
        }
    }
}
