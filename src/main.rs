//! Room Configurator - headless scenario runner
//!
//! Usage: room-configurator <scenario.ron> [--settings <file>] [--ticks N]
//!
//! Replays a list of actions against a fresh configurator, advances the
//! animation at 60 Hz and prints the resulting scene frame as JSON.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;

use room_configurator::{Action, ConfiguratorSettings, ConfiguratorState};

const TICK_SECONDS: f32 = 1.0 / 60.0;

/// Recorded session: actions in order, then some animation ticks
#[derive(Debug, Deserialize)]
struct Scenario {
    actions: Vec<Action>,
    #[serde(default)]
    ticks: u32,
}

impl Scenario {
    fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        ron::from_str(&contents)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))
    }
}

#[derive(Debug, PartialEq)]
struct Options {
    scenario: PathBuf,
    settings: Option<PathBuf>,
    ticks: Option<u32>,
}

fn parse_args(args: &[String]) -> anyhow::Result<Options> {
    let mut scenario = None;
    let mut settings = None;
    let mut ticks = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => {
                let path = iter.next().context("--settings needs a file")?;
                settings = Some(PathBuf::from(path));
            }
            "--ticks" => {
                let value = iter.next().context("--ticks needs a number")?;
                let count = value
                    .parse()
                    .with_context(|| format!("Invalid tick count: {}", value))?;
                ticks = Some(count);
            }
            other if other.starts_with("--") => bail!("Unknown option: {}", other),
            other => {
                if scenario.is_some() {
                    bail!("Unexpected argument: {}", other);
                }
                scenario = Some(PathBuf::from(other));
            }
        }
    }

    Ok(Options {
        scenario: scenario.context("Missing scenario file")?,
        settings,
        ticks,
    })
}

/// Apply every action, skipping the rejected ones, then tick
fn run(scenario: Scenario, settings: ConfiguratorSettings, ticks: u32) -> ConfiguratorState {
    let mut state = ConfiguratorState::new(settings);

    let total = scenario.actions.len();
    let mut skipped = 0;
    for (index, action) in scenario.actions.into_iter().enumerate() {
        if let Err(e) = state.dispatch(action) {
            log::warn!("Skipping action {}: {}", index, e);
            skipped += 1;
        }
    }
    log::info!("Applied {} of {} actions", total - skipped, total);

    for _ in 0..ticks {
        state.tick(TICK_SECONDS);
    }
    state
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Starting Room Configurator v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!(
                "Usage: {} <scenario.ron> [--settings <file>] [--ticks N]",
                args[0]
            );
            std::process::exit(1);
        }
    };

    let settings = match &options.settings {
        Some(path) => ConfiguratorSettings::load_from_file(path)
            .with_context(|| format!("Failed to load settings {}", path.display()))?,
        None => ConfiguratorSettings::load_or_default(),
    };

    let scenario = Scenario::load(&options.scenario)?;
    let ticks = options.ticks.unwrap_or(scenario.ticks);
    let state = run(scenario, settings, ticks);

    let json = serde_json::to_string_pretty(&state.frame())
        .context("Failed to serialize scene frame")?;
    println!("{}", json);
    Ok(())
}
