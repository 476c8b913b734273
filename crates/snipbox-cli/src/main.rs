//! Snipbox CLI
//!
//! Command-line interface for Snipbox

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use snipbox_core::logging_facility::{self, Profile};
use snipbox_core_types::RequestContext;
use snipbox_store::SqliteSnippetRepo;

mod commands;

use commands::CliError;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Dev,
    Prod,
}

impl From<LogProfile> for Profile {
    fn from(p: LogProfile) -> Self {
        match p {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snipbox")]
#[command(about = "Snipbox - Expiring text snippets", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(
        long,
        global = true,
        env = "SNIPBOX_DB",
        default_value = ".snipbox/snippets.db"
    )]
    db: PathBuf,

    /// Logging profile
    #[arg(long, global = true, env = "SNIPBOX_LOG", value_enum, default_value = "dev")]
    log: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a snippet
    Create(commands::create::CreateArgs),
    /// Show one live snippet
    View(commands::view::ViewArgs),
    /// List the newest live snippets
    Latest(commands::latest::LatestArgs),
    /// Search snippets by title, content and age
    Search(commands::search::SearchArgs),
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(parent) = cli.db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let conn = snipbox_store::db::open_ready(&cli.db)?;
    let repo = SqliteSnippetRepo::new(&conn);
    let ctx = RequestContext::new();

    match cli.command {
        Commands::Create(args) => commands::create::execute(args, &repo, &ctx),
        Commands::View(args) => commands::view::execute(args, &repo, &ctx),
        Commands::Latest(args) => commands::latest::execute(args, &repo, &ctx),
        Commands::Search(args) => commands::search::execute(args, &repo, &ctx),
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log.into());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
