use clap::{ArgAction, Parser, Subcommand};
use commands::{config, details, search, shell, watchlist};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;
mod spinner;

#[derive(Parser)]
#[command(name = "cinelist")]
#[command(about = "cinelist - Search movies and keep a watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to this file (rotated daily) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the movie catalog
    Search {
        /// Search term (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
    /// Show full details for a movie id
    Details {
        /// Catalog id, e.g. tt0372784
        id: String,
    },
    /// Add a movie to the watchlist by catalog id
    #[command(long_about = "Add a movie to the watchlist by catalog id. The title, year and poster are looked up in the catalog first. Adding a movie that is already saved does nothing.")]
    Add {
        id: String,
    },
    /// Remove a movie from the watchlist
    Remove {
        id: String,
    },
    /// Show the watchlist
    List,
    /// Remove every movie from the watchlist
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'y', action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Interactive session (default when no command is given)
    #[command(long_about = "Start an interactive session: search, add results to the watchlist, open details and remove saved movies. Type 'help' inside the session for the list of commands.")]
    Shell,
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show current configuration (masks the api key)
    Show {
        /// Show the api key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Save the OMDb api key
    #[command(long_about = "Save the OMDb api key to the configuration file. Get a free key at https://www.omdbapi.com/apikey.aspx. The OMDB_API_KEY environment variable overrides the saved key.")]
    SetKey {
        /// Api key (if not provided, will prompt)
        key: Option<String>,
    },
    /// Print the configuration and data paths
    Path,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Search { term } => search::run_search(&term.join(" "), &output).await,
        Commands::Details { id } => details::run_details(&id, &output).await,
        Commands::Add { id } => watchlist::run_add(&id, &output).await,
        Commands::Remove { id } => watchlist::run_remove(&id, &output),
        Commands::List => watchlist::run_list(&output),
        Commands::Clear { yes } => watchlist::run_clear(yes, &output),
        Commands::Shell => shell::run_shell(&output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show { full: false });
            config::run_config(cmd, &output)
        }
    }
}
