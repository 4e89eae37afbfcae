//! waymark CLI - map-pinned workout log.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use waymark::cli;

/// Get the version string.
///
/// - Release builds (on a git tag): "0.1.0"
/// - Development builds: "0.1.0-dev (abc1234)"
/// - Dirty working directory: "0.1.0-dev (abc1234-dirty)"
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("WAYMARK_GIT_HASH");
    const IS_RELEASE: &str = env!("WAYMARK_IS_RELEASE");

    // Use a static to avoid repeated allocations
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            VERSION.to_string()
        } else {
            format!("{VERSION}-dev ({GIT_HASH})")
        }
    })
}

#[derive(Parser)]
#[command(name = "waymark")]
#[command(author, version = version(), about = "Map-pinned workout log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a workout at a map location.
    Log {
        /// Workout kind ("running" or "cycling").
        kind: String,

        /// Latitude of the picked location.
        #[arg(long)]
        lat: f64,

        /// Longitude of the picked location.
        #[arg(long)]
        lng: f64,

        /// Distance in kilometres.
        #[arg(long)]
        distance: String,

        /// Duration in minutes.
        #[arg(long)]
        duration: String,

        /// Cadence in steps per minute (running).
        #[arg(long)]
        cadence: Option<String>,

        /// Elevation gain in metres (cycling).
        #[arg(long)]
        elevation: Option<String>,
    },

    /// List logged workouts.
    List,

    /// Show one workout and pan the map to it.
    Show {
        /// Workout ID.
        id: String,
    },

    /// Clear the workout log.
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Log {
            kind,
            lat,
            lng,
            distance,
            duration,
            cadence,
            elevation,
        } => cli::log::run(
            &kind,
            lat,
            lng,
            &distance,
            &duration,
            cadence.as_deref(),
            elevation.as_deref(),
        ),
        Commands::List => cli::list::run(),
        Commands::Show { id } => cli::show::run(&id),
        Commands::Reset => cli::reset::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("waymark: error: {e}");
            ExitCode::FAILURE
        }
    }
}
