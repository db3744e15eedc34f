use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use aquaroute_lib::{GeoMask, GeoPoint, RouteMode, RoutePlanner, RouteQuery};

#[derive(Parser, Debug)]
#[command(author, version, about = "AquaRoute ocean routing utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a water route between two coordinate pairs.
    Route {
        /// Start position as "<lat>, <lon>".
        #[arg(long = "from", allow_hyphen_values = true)]
        from: String,
        /// Stop position as "<lat>, <lon>".
        #[arg(long = "to", allow_hyphen_values = true)]
        to: String,
        /// Route computation mode.
        #[arg(long, value_enum, default_value_t = ModeArg::Grid)]
        mode: ModeArg,
        /// Emit the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ModeArg {
    /// Cell-by-cell route over the navigable water graph.
    Grid,
    /// Straight route between the raw endpoints.
    Direct,
}

impl From<ModeArg> for RouteMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Grid => RouteMode::Grid,
            ModeArg::Direct => RouteMode::Direct,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            from,
            to,
            mode,
            json,
        } => handle_route(&from, &to, mode.into(), json),
    }
}

fn handle_route(from: &str, to: &str, mode: RouteMode, json: bool) -> Result<()> {
    let start: GeoPoint = from
        .parse()
        .with_context(|| format!("invalid start position {from:?}"))?;
    let stop: GeoPoint = to
        .parse()
        .with_context(|| format!("invalid stop position {to:?}"))?;

    let planner = RoutePlanner::new(GeoMask::coarse_world()).with_mode(mode);
    let result = planner.plan_route(&RouteQuery::new(start, stop))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.found {
        println!(
            "Route ({} points, {:.1} km great-circle):",
            result.points.len(),
            result.distance_km
        );
        for point in &result.points {
            println!("- {point}");
        }
    } else {
        println!(
            "No navigable route found ({:.1} km great-circle between endpoints).",
            result.distance_km
        );
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
