use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{timed, CameraSnapshot, Hex, HexGrid, LayoutConfig, Vector2D};
use log::{info, LevelFilter};
use serde::{Deserialize, Serialize};
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;

/// CLI for poking at hex grids. Hexes are given as `q:r`, e.g. `2:-1`.
/// Output is always JSON.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the layout and camera. Supported
    /// formats: JSON, TOML. Without one, the defaults are used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// The six neighbours of a hex, starting East and going clockwise
    Neighbours {
        #[structopt(allow_hyphen_values = true)]
        hex: Hex<i64>,
    },
    /// Every hex exactly `radius` steps away, starting from the north-east
    /// corner
    Circle {
        #[structopt(allow_hyphen_values = true)]
        hex: Hex<i64>,
        radius: i32,
    },
    /// Every hex exactly `radius` steps away, in spiral order
    Ring {
        #[structopt(allow_hyphen_values = true)]
        hex: Hex<i64>,
        radius: i32,
    },
    /// A hex and every ring around it, out to `radius`
    Spiral {
        #[structopt(allow_hyphen_values = true)]
        hex: Hex<i64>,
        radius: i32,
    },
    /// A line of hexes between two hexes, inclusive
    Line {
        #[structopt(allow_hyphen_values = true)]
        from: Hex<i64>,
        #[structopt(allow_hyphen_values = true)]
        to: Hex<i64>,
    },
    /// World position of a hex's center
    Point {
        #[structopt(allow_hyphen_values = true)]
        hex: Hex<i64>,
    },
    /// World positions of a hex's six corners
    Corners {
        #[structopt(allow_hyphen_values = true)]
        hex: Hex<i64>,
    },
    /// The hex under a screen position, as seen by the configured camera
    Locate {
        #[structopt(allow_hyphen_values = true)]
        x: f64,
        #[structopt(allow_hyphen_values = true)]
        y: f64,
    },
    /// Every hex visible to the configured camera
    Visible,
}

/// Everything that can be loaded from the config file
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct CliConfig {
    layout: LayoutConfig,
    camera: CameraSnapshot,
}

fn load_config(config_path: &Path) -> anyhow::Result<CliConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

fn to_json(value: &impl Serialize) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("error serializing output")
}

/// Run one command, returning its JSON output
fn execute(command: Command, config: &CliConfig) -> anyhow::Result<String> {
    let mut grid =
        HexGrid::from_config(&config.layout).context("invalid layout config")?;
    let camera = config.camera;

    match command {
        Command::Neighbours { hex } => to_json(&hex.neighbours()),
        Command::Circle { hex, radius } => to_json(&hex.circle(radius)),
        Command::Ring { hex, radius } => to_json(&hex.spiral_ring(radius)),
        Command::Spiral { hex, radius } => {
            to_json(&timed!("Spiral", hex.spiral(radius)))
        }
        Command::Line { from, to } => to_json(&from.line_to(to)),
        Command::Point { hex } => to_json(&grid.layout.hex_to_point(hex)),
        Command::Corners { hex } => to_json(&grid.layout.hex_corners(hex)),
        Command::Locate { x, y } => {
            let hex = grid.screen_to_hex(Vector2D::new(x, y), &camera);
            to_json(&hex.to_int())
        }
        Command::Visible => {
            let hexes = timed!(
                "Visible hex enumeration",
                log::Level::Info,
                grid.visible_hexes(&camera)
            );
            info!("{} visible hexes", hexes.len());
            to_json(&hexes)
        }
    }
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => CliConfig::default(),
    };
    let output = execute(opt.command, &config)?;
    println!("{}", output);
    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
