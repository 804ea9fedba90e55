//! Civgen - Entry Point
//!
//! Loads settings, generates a world and prints a preview to stdout.
//! Logs go to stderr.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use civgen::render::{self, OutputFormat, WorldSummary};
use civgen::world::{find_start_position, GenerationError, World, WorldGenerator};
use civgen::WorldSettings;

#[derive(Parser, Debug)]
#[command(name = "civgen")]
#[command(about = "Generate wrapping strategy-game world maps")]
struct Args {
    /// Land mass, 0 (small) to 4 (large)
    #[arg(short = 'l', long)]
    land_size: Option<i32>,

    /// Temperature, 0 (cool) to 4 (warm)
    #[arg(short = 't', long)]
    temperature: Option<i32>,

    /// Climate, 0 (arid) to 3 (wet)
    #[arg(short = 'c', long)]
    climate: Option<i32>,

    /// Age, 0 (young) to 4 (old)
    #[arg(short = 'a', long)]
    age: Option<i32>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Settings file (defaults to settings.ron in the config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Colour the ASCII preview
    #[arg(long)]
    color: bool,

    /// Fresh seeds to try after a failed generation (ignored with a fixed seed)
    #[arg(short, long, default_value = "3")]
    retries: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .target(env_logger::Target::Stderr)
    .init();

    let args = Args::parse();
    log::info!("Starting civgen v{}", env!("CARGO_PKG_VERSION"));

    let settings = resolve_settings(&args)?;
    let result = run(&args, settings);
    if let Err(ref e) = result {
        log::error!("civgen failed: {:#}", e);
    }
    result
}

/// Settings file values, overridden by command line flags
fn resolve_settings(args: &Args) -> Result<WorldSettings> {
    let mut settings = WorldSettings::load(args.config.as_deref()).context("loading settings")?;

    if let Some(v) = args.land_size {
        settings.land_size = v;
    }
    if let Some(v) = args.temperature {
        settings.temperature = v;
    }
    if let Some(v) = args.climate {
        settings.climate = v;
    }
    if let Some(v) = args.age {
        settings.age = v;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn run(args: &Args, settings: WorldSettings) -> Result<()> {
    let pinned = settings.seed.is_some();
    let attempts = if pinned { 1 } else { args.retries + 1 };

    let mut last_error: Option<GenerationError> = None;
    for attempt in 1..=attempts {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "Generating world (land {}, temperature {}, climate {}, age {}, seed {})",
            settings.land_size,
            settings.temperature,
            settings.climate,
            settings.age,
            seed
        );

        let mut generator = WorldGenerator::with_seed(settings.clone(), seed);
        match generator.generate() {
            Ok(world) => return output(args, &mut generator, &world, seed),
            Err(e) => {
                log::warn!("Attempt {}/{} failed: {}", attempt, attempts, e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(e).context(format!("world generation failed after {} attempts", attempts)),
        None => Ok(()),
    }
}

fn output(args: &Args, generator: &mut WorldGenerator, world: &World, seed: u64) -> Result<()> {
    let start = find_start_position(world, generator.rng(), 0);
    if args.color && !args.format.supports_color() {
        log::info!("--color has no effect on {} output", args.format.name());
    }

    match args.format {
        OutputFormat::Ascii => {
            let color = args.color && render::color_supported();
            if args.color && !color {
                log::info!("Terminal does not support colour, printing plain glyphs");
            }
            let mut stdout = io::stdout().lock();
            render::write_ascii(&mut stdout, world, color)?;
        }
        OutputFormat::Summary => {
            let summary = WorldSummary::new(world, generator.report(), Some(seed), start);
            print!("{}", summary);
        }
        OutputFormat::Json => {
            let summary = WorldSummary::new(world, generator.report(), Some(seed), start);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
