//! `ekilisync` - terminal front-end over the local task store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ekilisync_core::Ekilisync;
use ekilisync_core::impls::FileStore;
use ekilisync_core::ports::{SystemClock, UlidGenerator};
use ekilisync_core::settings::load_settings;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "ekilisync", about = "Local to-do lists, shared with nobody yet")]
struct Cli {
    /// Optional JSON settings file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the data file from settings.
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Flat tasks.
    #[command(subcommand)]
    Task(TaskCommand),
    /// Grouped task lists with items.
    #[command(subcommand)]
    List(ListCommand),
    /// The sharing partner (stored locally only).
    #[command(subcommand)]
    Partner(PartnerCommand),
    /// Remove all tasks, task lists and the partner.
    Clear,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    List(TaskListArgs),
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// ISO-8601 due date.
        #[arg(long)]
        due: Option<String>,
    },
    Toggle {
        id: String,
    },
    Rm {
        id: String,
    },
    Stats,
}

#[derive(Debug, Args)]
struct TaskListArgs {
    /// Show completed tasks instead of active ones.
    #[arg(long, conflicts_with = "all")]
    completed: bool,
    #[arg(long)]
    all: bool,
}

#[derive(Debug, Subcommand)]
enum ListCommand {
    Show,
    Add {
        name: String,
        /// Initial items, repeatable.
        #[arg(long = "item")]
        items: Vec<String>,
    },
    Rm {
        id: String,
    },
    ItemAdd {
        list: String,
        text: String,
    },
    ItemToggle {
        list: String,
        item: String,
    },
    ItemRm {
        list: String,
        item: String,
    },
}

#[derive(Debug, Subcommand)]
enum PartnerCommand {
    Show,
    Set { name: String, email: String },
    Clear,
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(path) = cli.data_file {
        settings.data_file = path;
    }
    init_tracing(&settings.log_level);
    tracing::debug!(data_file = %settings.data_file.display(), "opening store");

    let app = Ekilisync::new(Arc::new(FileStore::new(&settings.data_file)));
    let ctx = commands::Context {
        app,
        clock: SystemClock,
        ids: UlidGenerator::new(SystemClock),
    };

    match cli.command {
        Command::Task(cmd) => commands::task(&ctx, cmd).await,
        Command::List(cmd) => commands::list(&ctx, cmd).await,
        Command::Partner(cmd) => commands::partner(&ctx, cmd).await,
        Command::Clear => {
            ctx.app.clear_all_data().await.context("Failed to clear data")?;
            println!("All data cleared.");
            Ok(())
        }
    }
}
