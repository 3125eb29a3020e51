#![warn(non_snake_case)]
//! # Corridor Maps Driver
//!
//! Generates a batch of bordered corridor maps and prints them to the
//! terminal, optionally writing each one as a PNG. Parameters come from the
//! command line or from a JSON run configuration:
//!
//! ```text
//! corridor_maps [--config run.json] [--count N] [--width W] [--height H]
//!               [--easiness E] [--seed S] [--max-retries N | --unbounded]
//!               [--simple] [--png DIR] [--scale PX] [--no-color] [--quiet]
//! ```
//!
//! Command-line flags override values loaded from `--config`. Set `RUST_LOG`
//! to control log output.
//!
//! ## License
//! Licensed under the MIT License.

use corridor_maps::generator::{ConnectivityRule, RunConfig};
use corridor_maps::render;
use corridor_maps::MapGenerator;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::path::PathBuf;

struct Args {
    config: Option<PathBuf>,
    count: Option<usize>,
    width: Option<usize>,
    height: Option<usize>,
    easiness: Option<usize>,
    seed: Option<u64>,
    max_retries: Option<Option<u32>>,
    simple: bool,
    png_dir: Option<PathBuf>,
    scale: u32,
    color: bool,
    quiet: bool,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("missing value for {}", flag))?;
    value
        .parse()
        .map_err(|_| format!("invalid {} value: {}", flag, value))
}

fn parse_args() -> Result<Args, String> {
    let argv: Vec<String> = std::env::args().collect();
    let mut args = Args {
        config: None,
        count: None,
        width: None,
        height: None,
        easiness: None,
        seed: None,
        max_retries: None,
        simple: false,
        png_dir: None,
        scale: 16,
        color: true,
        quiet: false,
    };

    let mut i = 1;
    while i < argv.len() {
        let flag = argv[i].as_str();
        match flag {
            "--config" => {
                i += 1;
                args.config = Some(parse_value(flag, argv.get(i))?);
            }
            "--count" => {
                i += 1;
                args.count = Some(parse_value(flag, argv.get(i))?);
            }
            "--width" => {
                i += 1;
                args.width = Some(parse_value(flag, argv.get(i))?);
            }
            "--height" => {
                i += 1;
                args.height = Some(parse_value(flag, argv.get(i))?);
            }
            "--easiness" => {
                i += 1;
                args.easiness = Some(parse_value(flag, argv.get(i))?);
            }
            "--seed" => {
                i += 1;
                args.seed = Some(parse_value(flag, argv.get(i))?);
            }
            "--max-retries" => {
                i += 1;
                args.max_retries = Some(Some(parse_value(flag, argv.get(i))?));
            }
            "--unbounded" => args.max_retries = Some(None),
            "--simple" => args.simple = true,
            "--png" => {
                i += 1;
                args.png_dir = Some(parse_value(flag, argv.get(i))?);
            }
            "--scale" => {
                i += 1;
                args.scale = parse_value(flag, argv.get(i))?;
            }
            "--no-color" => args.color = false,
            "--quiet" => args.quiet = true,
            "--help" | "-h" => {
                println!(
                    "Usage: corridor_maps [--config FILE] [--count N] [--width W] [--height H] \
                     [--easiness E] [--seed S] [--max-retries N | --unbounded] [--simple] \
                     [--png DIR] [--scale PX] [--no-color] [--quiet]"
                );
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(args)
}

/// Loads the run configuration and applies command-line overrides.
fn build_run_config(args: &Args) -> Result<RunConfig, Box<dyn Error>> {
    let mut run = match &args.config {
        Some(path) => {
            info!("Loading run configuration from {}", path.display());
            RunConfig::load_from_file(path)?
        }
        None => RunConfig::default(),
    };

    if args.simple {
        run.generator.rule = ConnectivityRule::OneBack;
        run.generator.wrap_walls = false;
    }
    if let Some(count) = args.count {
        run.request.count = count;
    }
    if let Some(width) = args.width {
        run.request.width = width;
    }
    if let Some(height) = args.height {
        run.request.height = height;
    }
    if let Some(easiness) = args.easiness {
        run.request.easiness_factor = easiness;
    }
    if let Some(max_retries) = args.max_retries {
        run.generator.max_retries = max_retries;
    }
    if args.seed.is_some() {
        run.seed = args.seed;
    }
    Ok(run)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = build_run_config(&args)?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("Using seed {}", seed);

    let generator = MapGenerator::new(config.generator);
    let mut rng = StdRng::seed_from_u64(seed);
    let maps = generator.generate(&config.request, &mut rng)?;

    if let Some(dir) = &args.png_dir {
        std::fs::create_dir_all(dir)?;
    }

    for (index, map) in maps.iter().enumerate() {
        if !args.quiet {
            println!();
            if args.color {
                print!("{}", render::ansi(map));
            } else {
                print!("{}", render::plain(map));
            }
        }
        if let Some(dir) = &args.png_dir {
            let path = dir.join(format!("map_{:03}.png", index));
            render::save_png(map, args.scale, &path)?;
            info!("Wrote {}", path.display());
        }
    }

    let stats = maps.stats();
    info!(
        "{} map(s), {} rejected candidates, {:.3}s",
        stats.map_count, stats.rejected_candidates, stats.generation_time
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("corridor_maps starting...");

    let args = parse_args().map_err(|msg| {
        error!("{}", msg);
        msg
    })?;

    if let Err(e) = run(args) {
        error!("Generation failed: {}", e);
        return Err(e);
    }

    info!("corridor_maps exiting.");
    Ok(())
}
