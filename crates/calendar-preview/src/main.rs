use std::path::PathBuf;

use anyhow::Result;
use calendar_preview::{load_geometry, render_preview, sample, write_png, Screen, Snapshot};
use calendar_render::{ErrorIcon, GridGeometry};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calendar-preview")]
#[command(about = "Render a two-week calendar snapshot to PNG", long_about = None)]
#[command(version)]
struct Cli {
    /// Snapshot JSON (bare or wrapped in `attributes`). Uses the built-in
    /// sample fortnight when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Geometry JSON; missing fields keep the 800x480 defaults.
    #[arg(short, long)]
    geometry: Option<PathBuf>,

    /// Output PNG path.
    #[arg(short, long, default_value = "calendar.png")]
    output: PathBuf,

    /// Wi-Fi RSSI in dBm for the status bar (0 = disconnected).
    #[arg(long, default_value_t = -55, allow_hyphen_values = true)]
    rssi: i32,

    /// Battery voltage in millivolts for the status bar.
    #[arg(long)]
    battery_mv: Option<u32>,

    /// Render the full-screen error state with this message instead.
    #[arg(long)]
    error: Option<String>,

    /// Second error line; without it the message wraps onto two lines.
    #[arg(long, requires = "error")]
    error_detail: Option<String>,

    /// Icon for the error state.
    #[arg(long, value_enum, default_value_t = IconArg::Network)]
    icon: IconArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum IconArg {
    Network,
    Battery,
    Time,
}

impl From<IconArg> for ErrorIcon {
    fn from(arg: IconArg) -> Self {
        match arg {
            IconArg::Network => Self::NetworkUnavailable,
            IconArg::Battery => Self::LowBattery,
            IconArg::Time => Self::TimeSync,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    // A second init (e.g. under a test harness) is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let cli = Cli::parse();

    let snapshot = match &cli.input {
        Some(path) => Snapshot::load(path)?,
        None => {
            tracing::info!("no snapshot given, using the sample fortnight");
            Snapshot::from_json(sample::SAMPLE_SNAPSHOT)?
        }
    };
    let geometry = match &cli.geometry {
        Some(path) => load_geometry(path)?,
        None => GridGeometry::default(),
    };

    let screen = match cli.error {
        Some(line1) => Screen::Error {
            icon: cli.icon.into(),
            line1,
            line2: cli.error_detail,
        },
        None => Screen::Calendar {
            rssi: cli.rssi,
            battery_mv: cli.battery_mv,
        },
    };

    let framebuffer = render_preview(&snapshot, geometry, &screen)?;
    write_png(&framebuffer, &cli.output)?;
    println!("Wrote {}", cli.output.display());
    Ok(())
}
