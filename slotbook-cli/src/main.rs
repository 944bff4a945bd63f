mod commands;
mod input;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slotbook_core::Store;
use slotbook_core::config::SlotbookConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slotbook")]
#[command(about = "Schedule people on a shared date and share who is on when")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the list of people
    Names {
        #[command(subcommand)]
        action: NamesAction,
    },
    /// Give selected people a time on a shared date
    Schedule {
        /// Shared date (D/M/YYYY, or e.g. "tomorrow", "next friday")
        #[arg(short, long)]
        date: Option<String>,

        /// NAME=TIME assignment, repeatable (e.g. --at "Alice=9am")
        #[arg(long = "at", value_name = "NAME=TIME")]
        assignments: Vec<String>,
    },
    /// Show upcoming events for one person, or for everyone
    Events {
        name: Option<String>,

        /// Hand the summary to a share helper (falls back to stdout)
        #[arg(long)]
        share: bool,

        /// Share helper to use (runs slotbook-share-<APP>)
        #[arg(long, requires = "share")]
        app: Option<String>,

        /// Print events as JSON
        #[arg(long, conflicts_with = "share")]
        json: bool,
    },
    /// Show every stored event for a person, newest first
    History { name: String },
    /// Change an event's name, date or time
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        time: Option<String>,
    },
    /// Delete an event
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Remove events dated before today
    Purge,
    /// Show paths and update summary settings
    Config {
        /// AM/PM replacement labels, as "AM_LABEL,PM_LABEL"
        #[arg(long, value_name = "AM,PM")]
        labels: Option<String>,

        /// Remove the AM/PM replacement labels
        #[arg(long, conflicts_with = "labels")]
        clear_labels: bool,

        /// Default share helper
        #[arg(long)]
        share_app: Option<String>,
    },
}

#[derive(Subcommand)]
enum NamesAction {
    /// Register a new name
    Add { name: String },
    /// List registered names
    List,
    /// Remove a registered name (its events are kept)
    Remove { name: String },
    /// Register names that only appear on stored events
    Sync,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SlotbookConfig::load()?;

    match cli.command {
        Commands::Config {
            labels,
            clear_labels,
            share_app,
        } => commands::config::run(config, labels, clear_labels, share_app),
        Commands::Names { action } => {
            let store = open_store(&config)?;
            match action {
                NamesAction::Add { name } => commands::names::add(&store, &name),
                NamesAction::List => commands::names::list(&store),
                NamesAction::Remove { name } => commands::names::remove(&store, &name),
                NamesAction::Sync => commands::names::sync(&store),
            }
        }
        Commands::Schedule { date, assignments } => {
            commands::schedule::run(&open_store(&config)?, date, assignments)
        }
        Commands::Events {
            name,
            share,
            app,
            json,
        } => {
            let store = open_store(&config)?;
            let options = commands::events::EventsOptions { share, app, json };
            commands::events::run(&store, &config, name.as_deref(), options).await
        }
        Commands::History { name } => commands::events::history(&open_store(&config)?, &name),
        Commands::Edit {
            id,
            name,
            date,
            time,
        } => commands::edit::run(&open_store(&config)?, id, name, date, time),
        Commands::Delete { id, force } => commands::delete::run(&open_store(&config)?, id, force),
        Commands::Purge => commands::purge::run(&open_store(&config)?),
    }
}

fn open_store(config: &SlotbookConfig) -> Result<Store> {
    let db_path = config.database_path();
    Store::open(&db_path)
        .with_context(|| format!("Could not open database at {}", db_path.display()))
}
