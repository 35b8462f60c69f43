use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_cli::commands::fixtures::handle_fixtures_command;
use wayfinder_cli::commands::route::{handle_route_command, RouteCommandArgs};
use wayfinder_cli::commands::validate::handle_validate_command;
use wayfinder_cli::commands::MapSource;
use wayfinder_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Planar road map route planner")]
struct Cli {
    /// Road map JSON file to load.
    #[arg(long, env = "WAYFINDER_MAP", global = true)]
    map: Option<PathBuf>,

    /// Built-in fixture map used when no map file is given.
    #[arg(long, default_value = "map-10", global = true)]
    fixture: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two intersections.
    Route {
        /// Starting intersection id.
        #[arg(long = "from", allow_hyphen_values = true)]
        from: String,
        /// Destination intersection id.
        #[arg(long = "to", allow_hyphen_values = true)]
        to: String,
    },
    /// Load a road map and report whether it is well formed.
    Validate,
    /// List the built-in fixture maps.
    Fixtures,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let source = MapSource::resolve(cli.map, &cli.fixture);

    match cli.command {
        Command::Route { from, to } => {
            handle_route_command(&source, cli.format, &RouteCommandArgs { from, to })
        }
        Command::Validate => handle_validate_command(&source, cli.format),
        Command::Fixtures => handle_fixtures_command(cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
