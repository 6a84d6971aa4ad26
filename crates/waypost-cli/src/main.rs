#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use waypost_core::config::resolve_config;
use waypost_core::snapshot::load_json;
use waypost_core::{ErrorCode, RoadNetwork};

use cmd::Context;
use output::{CliError, OutputMode, render_error};

/// Network file used when `--network` is not given.
const DEFAULT_NETWORK_FILE: &str = "waypost.json";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "waypost: routing and analysis for touristic road networks",
    long_about = None
)]
struct Cli {
    /// Network snapshot to load (JSON).
    #[arg(long, global = true, value_name = "FILE")]
    network: Option<PathBuf>,

    /// Config file to use instead of waypost.toml discovery.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Registry",
        about = "List points of interest",
        after_help = "EXAMPLES:\n    # Every point, alphabetically\n    waypost points\n\n    # Only nature spots\n    waypost points --category nature"
    )]
    Points(cmd::points::PointsArgs),

    #[command(next_help_heading = "Network", about = "List points on the road network")]
    Vertices,

    #[command(next_help_heading = "Network", about = "List roads with distances and travel times")]
    Roads,

    #[command(
        next_help_heading = "Routing",
        about = "Plan the shortest trip between two points",
        after_help = "EXAMPLES:\n    waypost itinerary \"Sé\" \"Algar do Carvão\""
    )]
    Itinerary(cmd::itinerary::ItineraryArgs),

    #[command(
        next_help_heading = "Routing",
        about = "Close roads and list the remaining routes",
        long_about = "Close one or more roads for good and list every remaining route between \
                      the first closed road's endpoints, shortest first.",
        after_help = "EXAMPLES:\n    # Close one road and keep the change\n    waypost reroute --close \"Sé:Monte Brasil\" --save"
    )]
    Reroute(cmd::reroute::RerouteArgs),

    #[command(next_help_heading = "Analysis", about = "Rank points by centrality")]
    Rank(cmd::rank::RankArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Show the reachability tree from a root",
        long_about = "Show every point reachable from a root and the road that first reaches it. \
                      With two candidates, the one with more outgoing roads is the root."
    )]
    Tree(cmd::tree::TreeArgs),

    #[command(
        next_help_heading = "Registry",
        about = "Suggest popular points near a location",
        after_help = "EXAMPLES:\n    waypost nearby 38.6558 -27.2186 --radius 2000"
    )]
    Nearby(cmd::nearby::NearbyArgs),

    #[command(
        next_help_heading = "Editing",
        about = "Register, update or rate a point of interest",
        after_help = "EXAMPLES:\n    waypost point add \"Sé\" --lat 38.6558 --lon -27.2186 --category culture\n    waypost point rate \"Sé\" 4"
    )]
    Point(cmd::point::PointArgs),

    #[command(next_help_heading = "Editing", about = "Add or remove road network points")]
    Vertex(cmd::vertex::VertexArgs),

    #[command(next_help_heading = "Editing", about = "Open or close a road")]
    Road(cmd::road::RoadArgs),
}

impl Commands {
    /// Editing commands may start a network file from scratch.
    const fn edits_network(&self) -> bool {
        matches!(self, Self::Point(_) | Self::Vertex(_) | Self::Road(_))
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("WAYPOST_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "waypost=debug,waypost_core=debug,waypost_analysis=debug,warn"
        } else {
            "waypost=info,waypost_core=info,waypost_analysis=info,warn"
        })
    });

    let format = env::var("WAYPOST_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output, so logs go to stderr.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Resolve config, load the network and dispatch.
fn run(cli: Cli, output: OutputMode) -> Result<(), CliError> {
    let project_root = env::current_dir().map_err(|e| CliError::new(e.to_string()))?;

    let config = resolve_config(cli.config.as_deref(), &project_root)
        .map_err(|e| CliError::with_code(ErrorCode::ConfigParseError, format!("{e:#}")))?;

    let network_path = cli
        .network
        .unwrap_or_else(|| project_root.join(DEFAULT_NETWORK_FILE));
    let speed = config.routing.walking_speed_kmh;
    let network = if cli.command.edits_network() && !network_path.exists() {
        info!(path = %network_path.display(), "starting a new network");
        RoadNetwork::with_walking_speed(speed)
    } else {
        let snapshot = load_json(&network_path)
            .map_err(|e| CliError::with_code(ErrorCode::SnapshotUnreadable, format!("{e:#}")))?;
        RoadNetwork::from_snapshot(snapshot, speed)
    }
    .map_err(|e| CliError::with_code(e.code(), format!("{}: {e}", network_path.display())))?;
    debug!(path = %network_path.display(), "network ready");

    let mut ctx = Context {
        network,
        network_path,
        config,
        output,
    };

    let result = match cli.command {
        Commands::Points(args) => cmd::points::run_points(&ctx, &args),
        Commands::Vertices => cmd::listing::run_vertices(&ctx),
        Commands::Roads => cmd::listing::run_roads(&ctx),
        Commands::Itinerary(args) => cmd::itinerary::run_itinerary(&ctx, &args),
        Commands::Reroute(args) => cmd::reroute::run_reroute(&mut ctx, &args),
        Commands::Rank(args) => cmd::rank::run_rank(&ctx, &args),
        Commands::Tree(args) => cmd::tree::run_tree(&ctx, &args),
        Commands::Nearby(args) => cmd::nearby::run_nearby(&ctx, &args),
        Commands::Point(args) => cmd::point::run_point(&mut ctx, &args),
        Commands::Vertex(args) => cmd::vertex::run_vertex(&mut ctx, &args),
        Commands::Road(args) => cmd::road::run_road(&mut ctx, &args),
    };
    result.map_err(|e| CliError::from_anyhow(&e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = OutputMode::from_json_flag(cli.json);

    match run(cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing useful remains to do if stderr itself fails.
            let _ = render_error(output, &err);
            ExitCode::FAILURE
        }
    }
}
