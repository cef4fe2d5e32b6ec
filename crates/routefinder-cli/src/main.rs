use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use routefinder_cli::commands::path::{handle_path_command, PathCommandArgs};
use routefinder_cli::commands::prompt::run_prompt;
use routefinder_cli::commands::routes::handle_routes_command;
use routefinder_cli::output::OutputFormat;
use routefinder_lib::{load_graph_from_path, RouteGraph};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths over a table of transit routes")]
struct Cli {
    /// CSV file of `source,destination,weight` rows.
    #[arg(long, env = "ROUTEFINDER_ROUTES_FILE", default_value = "routes.csv")]
    file: PathBuf,

    /// Output format for route tables and results.
    #[arg(long, value_enum, env = "ROUTEFINDER_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip printing the route table before the interactive prompt.
    #[arg(long)]
    no_table: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the loaded route table.
    Routes,
    /// Compute the shortest path between two stations.
    Path {
        /// Starting station name.
        #[arg(long = "from")]
        from: String,
        /// Destination station name.
        #[arg(long = "to")]
        to: String,
    },
    /// Interactively ask for start and end stations (default).
    Prompt,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let graph = load_routes(&cli.file)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Prompt) {
        Command::Routes => {
            handle_routes_command(&graph, cli.format, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Path { from, to } => {
            let args = PathCommandArgs { from, to };
            let found = handle_path_command(&graph, cli.format, &args, &mut out)?;
            Ok(if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Prompt => {
            if !cli.no_table {
                handle_routes_command(&graph, cli.format, &mut out)?;
            }
            run_prompt(&graph, cli.format, io::stdin().lock(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_routes(path: &Path) -> Result<RouteGraph> {
    load_graph_from_path(path)
        .with_context(|| format!("failed to load routes from {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
