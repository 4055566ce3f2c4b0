use bevy::{
    log::{Level, LogPlugin},
    prelude::*,
};
use clap::{Parser, ValueEnum};
use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use ringflyer::{
    plugins::FlightPlugin,
    rendering::help_text,
    resources::SimulationConfig,
    session::run_session,
    utils::{clock_seed, Result},
};

#[derive(Parser)]
#[command(name = "ringflyer", about = "Fly through the ring course, one tick per line")]
struct Cli {
    /// YAML or JSON simulation config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Course seed, overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rings, overrides the config
    #[arg(long)]
    rings: Option<usize>,

    /// Print telemetry as JSON lines instead of the HUD
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(rings) = cli.rings {
        config.course.ring_count = rings;
    }
    let seed = cli.seed.or(config.course.seed).unwrap_or_else(clock_seed);

    let plugin = FlightPlugin::new(config)?.with_seed(seed);

    let mut app = App::new();
    app.add_plugins(LogPlugin {
        level: cli.log_level.into(),
        ..default()
    })
    .add_plugins(plugin);

    let mut out = io::stdout().lock();
    if !cli.json {
        writeln!(out, "Ring course flight simulator (course seed {seed})")?;
        writeln!(out, "Goal: fly through the rings before the fuel runs out.\n")?;
        writeln!(out, "{}", help_text())?;
    }

    run_session(&mut app, io::stdin().lock(), &mut out, cli.json)?;
    Ok(())
}
