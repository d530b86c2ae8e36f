//! Bolt Control - CLI for the Bolt school assistant knowledge base
//!
//! Manages the local knowledge base and answers questions offline.

use anyhow::{Context, Result};
use bolt_common::{BoltConfig, KnowledgeStore, SqliteKv};
use boltctl::errors::{exit_code, EXIT_SUCCESS};
use boltctl::{commands, logging, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Version is embedded at build time
const VERSION: &str = env!("BOLT_VERSION");

#[derive(Parser)]
#[command(name = "boltctl")]
#[command(about = "Bolt - school assistant knowledge base", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Knowledge database file (overrides config)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Config file (overrides $BOLT_CONFIG and default locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List knowledge base entries
    List {
        /// Only show entries whose topic or information contains this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Add a new entry
    Add {
        #[arg(long)]
        topic: String,

        #[arg(long)]
        information: String,
    },

    /// Edit an existing entry
    Edit {
        /// Entry id (see `boltctl list`)
        id: String,

        #[arg(long)]
        topic: Option<String>,

        #[arg(long)]
        information: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id (see `boltctl list`)
        id: String,
    },

    /// Answer a question from the local knowledge base
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Show which entry matched and its score
        #[arg(long)]
        explain: bool,
    },

    /// Print the system instruction for the online assistant
    Prompt,

    /// Replace stored entries with the built-in defaults
    Reset,

    /// Show effective configuration and paths
    Config,
}

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            exit_code(&e)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => BoltConfig::load_from(path)?,
        None => BoltConfig::load()?,
    };
    logging::init(&config.log.level);

    let db_path = cli.db.clone().unwrap_or_else(|| config.database_path());
    let color = output::use_color(config.output.color, cli.no_color);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Commands::Config = cli.command {
        return commands::config(&config, &db_path, &mut out, color);
    }

    let kv = SqliteKv::open(&db_path)
        .with_context(|| format!("Failed to open knowledge database {}", db_path.display()))?;
    let mut store = KnowledgeStore::new(kv);

    match cli.command {
        Commands::List { filter } => commands::list(&mut store, filter.as_deref(), &mut out, color),
        Commands::Add { topic, information } => {
            commands::add(&mut store, &topic, &information, &mut out, color)
        }
        Commands::Edit {
            id,
            topic,
            information,
        } => commands::edit(
            &mut store,
            &id,
            topic.as_deref(),
            information.as_deref(),
            &mut out,
            color,
        ),
        Commands::Delete { id } => commands::delete(&mut store, &id, &mut out, color),
        Commands::Ask { question, explain } => {
            commands::ask(&mut store, &question.join(" "), explain, &mut out, color)
        }
        Commands::Prompt => commands::prompt(&mut store, &mut out),
        Commands::Reset => commands::reset(&mut store, &mut out, color),
        Commands::Config => unreachable!("handled before opening the store"),
    }
}
