// SPDX-License-Identifier: MIT OR Apache-2.0
//! Vitrine preview - run page behavior without a browser
//!
//! Usage: `vitrine_preview <scenario.ron> [settings.ron]`
//!
//! Without a settings argument, `vitrine.ron` in the working directory is
//! used when present, defaults otherwise. Every document write is logged at
//! debug level under `vitrine::document`.

mod scenario;

use scenario::Scenario;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vitrine_behavior::{PageSettings, SETTINGS_FILE_NAME};
use vitrine_web::{ConsoleLayer, ConsoleLevel};

fn main() -> ExitCode {
    // Capture layer, counted for the closing summary
    let (capture_layer, captured) = ConsoleLayer::channel();

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(directive("vitrine_preview=info"))
        .add_directive(directive("vitrine_behavior=info"))
        .add_directive(directive("vitrine::document=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(capture_layer)
        .init();

    tracing::info!("Starting Vitrine preview v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let Some(scenario_path) = args.next() else {
        tracing::error!("Usage: vitrine_preview <scenario.ron> [settings.ron]");
        return ExitCode::from(2);
    };

    let settings = match load_settings(args.next().as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = Scenario::load(&scenario_path).and_then(|scenario| scenario.run(&settings));

    let warnings = captured
        .try_iter()
        .filter(|line| matches!(line.level, ConsoleLevel::Warn | ConsoleLevel::Error))
        .count();

    match result {
        Ok(report) => {
            tracing::info!(
                steps = report.steps,
                elapsed_ms = report.elapsed.as_millis() as u64,
                final_slide = ?report.final_slide,
                warnings,
                "Scenario passed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Scenario failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn directive(text: &str) -> tracing_subscriber::filter::Directive {
    text.parse()
        .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
}

fn load_settings(explicit: Option<&Path>) -> vitrine_behavior::settings::Result<PageSettings> {
    if let Some(path) = explicit {
        return PageSettings::load(path);
    }
    let default_path = Path::new(SETTINGS_FILE_NAME);
    if default_path.exists() {
        PageSettings::load(default_path)
    } else {
        Ok(PageSettings::default())
    }
}
