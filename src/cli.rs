use crate::config::{Config, load_config};
use crate::position_dump::{PositionDump, write_position_dump};
use crate::scenario::parse_scenarios;
use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "popover-place",
    version,
    about = "Compute popover placements for trigger/body/viewport scenarios"
)]
pub struct Args {
    /// Scenario file (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file ({"placement": {"arrowOffset": 12}})
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Override the distance between the arrow and the body corner
    #[arg(long = "arrowOffset")]
    pub arrow_offset: Option<f32>,

    /// Include every candidate with its fit check and visible area
    #[arg(long = "explain")]
    pub explain: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args)?;

    let input = read_input(args.input.as_deref())?;
    let scenarios = parse_scenarios(&input)?;
    info!("computing {} popover placement(s)", scenarios.len());

    let dumps: Vec<PositionDump> = scenarios
        .iter()
        .map(|scenario| PositionDump::from_scenario(scenario, &config.placement, args.explain))
        .collect();

    match args.output.as_deref() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_position_dump(&mut writer, &dumps)?;
            writeln!(writer)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_position_dump(&mut writer, &dumps)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn apply_overrides(config: &mut Config, args: &Args) -> Result<()> {
    if let Some(offset) = args.arrow_offset {
        if !offset.is_finite() || offset < 0.0 {
            return Err(anyhow::anyhow!(
                "--arrowOffset must be a non-negative number, got {offset}"
            ));
        }
        config.placement.arrow_offset = offset;
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
