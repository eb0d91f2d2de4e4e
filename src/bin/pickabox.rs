//! pickabox CLI — play a round or sample the prize odds from the command line.
//!
//! Usage:
//!   cargo run --bin pickabox -- play --device mobile --pick 2
//!   cargo run --bin pickabox -- --brand-file brand.toml odds --draws 100000

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rustc_hash::FxHashMap;
use tracing_subscriber::EnvFilter;

use pick_a_box::brands;
use pick_a_box::core::{BrandConfig, DeviceClass, GameRng};
use pick_a_box::round::RoundEngine;

#[derive(Parser)]
#[command(name = "pickabox", about = "Pick-a-box prize engine")]
struct Cli {
    /// Brand TOML file (overrides --brand)
    #[arg(long, env = "PICKABOX_BRAND_FILE")]
    brand_file: Option<PathBuf>,

    /// Built-in brand key
    #[arg(long, default_value = "wiply")]
    brand: String,

    /// Random seed (default: from OS entropy)
    #[arg(long, env = "PICKABOX_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a round and pick one box
    Play {
        /// Device class used to size the round
        #[arg(long, value_enum, default_value_t = Device::Desktop)]
        device: Device,

        /// Explicit box count (overrides --device)
        #[arg(long)]
        boxes: Option<usize>,

        /// Box to pick (0-based)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        pick: i64,

        /// Print the final engine snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sample many draws and compare observed odds with configured odds
    Odds {
        /// Number of draws
        #[arg(long, default_value = "100000")]
        draws: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Device {
    Mobile,
    Desktop,
}

impl From<Device> for DeviceClass {
    fn from(device: Device) -> Self {
        match device {
            Device::Mobile => DeviceClass::Mobile,
            Device::Desktop => DeviceClass::Desktop,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let brand = match &cli.brand_file {
        Some(path) => BrandConfig::load(path)?,
        None => brands::by_key(&cli.brand)?,
    };
    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(brand = %brand.name, seed = rng.seed(), "using brand");

    match cli.command {
        Command::Play {
            device,
            boxes,
            pick,
            json,
        } => play(&brand, rng, device.into(), boxes, pick, json),
        Command::Odds { draws } => odds(&brand, rng, draws),
    }
}

fn play(
    brand: &BrandConfig,
    rng: GameRng,
    device: DeviceClass,
    boxes: Option<usize>,
    pick: i64,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = RoundEngine::from_brand(brand, rng)?;

    let round = match boxes {
        Some(n) => engine.start(n)?,
        None => engine.start_for_device(device)?,
    };
    println!("Round {} with {} boxes", round.number(), round.box_count());

    if let Some(prize) = engine.select(pick)? {
        let verdict = if prize.is_win() { "WIN" } else { "no win" };
        println!("Box {}: {} [{}]", pick, prize.title, verdict);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    } else if let Some(round) = engine.round() {
        for (i, prize) in round.assignments().iter().enumerate() {
            println!("  box {}: {}", i, prize.title);
        }
    }
    Ok(())
}

fn odds(brand: &BrandConfig, rng: GameRng, draws: usize) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = brand.catalog()?;
    let mut source = rng.for_context("odds");

    let mut counts: FxHashMap<_, usize> = FxHashMap::default();
    for _ in 0..draws {
        *counts.entry(catalog.draw_one(&mut source).id).or_default() += 1;
    }

    println!("{:<6} {:>10} {:>10}  title", "id", "expected", "observed");
    for prize in catalog.iter() {
        let expected = catalog.probability(prize.id).unwrap_or(0.0);
        let observed = counts.get(&prize.id).copied().unwrap_or(0) as f64 / draws.max(1) as f64;
        println!(
            "{:<6} {:>9.2}% {:>9.2}%  {}",
            prize.id.raw(),
            expected * 100.0,
            observed * 100.0,
            prize.title
        );
    }
    println!("win probability: {:.2}%", catalog.win_probability() * 100.0);
    Ok(())
}
