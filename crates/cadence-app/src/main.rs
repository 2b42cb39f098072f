//! `cadence` command line entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use cadence_core::config::load_config;
use cadence_rule::rule::CalendarDate;

mod commands;

/// Recurring task scheduler
#[derive(Parser)]
#[command(name = "cadence")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the next occurrence of a rule
    Next {
        /// Start date (YYYYMMDD)
        #[arg(short, long)]
        date: String,

        /// Repeat rule, e.g. "d 7" or "m 1,-1"
        #[arg(short, long)]
        repeat: String,

        /// Reference date (YYYYMMDD), today when omitted
        #[arg(short, long)]
        now: Option<String>,
    },

    /// Validate a rule and print its canonical form
    Check {
        /// Repeat rule
        rule: String,
    },

    /// Validate a task and print it with its date fixed up
    Task {
        /// Task JSON file, stdin when omitted
        #[arg(short, long)]
        file: Option<String>,

        /// Treat the task as an update of an existing task
        #[arg(short, long)]
        update: bool,
    },

    /// Print what marking a task done does
    Done {
        /// Task JSON file, stdin when omitted
        #[arg(short, long)]
        file: Option<String>,
    },

    /// List tasks from a JSON array, optionally filtered
    List {
        /// Task list JSON file
        #[arg(short, long)]
        file: String,

        /// Search text or DD.MM.YYYY date
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let today = CalendarDate::today_in(config.schedule.tz()?);

    let output = match cli.command {
        Commands::Next { date, repeat, now } => {
            commands::next::run(now.as_deref(), &date, &repeat, today)?
        }
        Commands::Check { rule } => commands::check::run(&rule)?,
        Commands::Task { file, update } => {
            let input = commands::read_input(file.as_deref())?;
            commands::task::run(&input, update, today)?
        }
        Commands::Done { file } => {
            let input = commands::read_input(file.as_deref())?;
            commands::done::run(&input, today)?
        }
        Commands::List { file, search } => {
            let input = commands::read_input(Some(&file))?;
            commands::list::run(&input, &search, config.schedule.effective_search_limit())?
        }
    };

    println!("{output}");
    Ok(())
}
