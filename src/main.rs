mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daybook_core::EntryId;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Pick a day on the calendar and keep a to-do list for it")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an entry to a day
    Add {
        text: String,

        /// Day to add to (YYYY-MM-DD, "today", "tomorrow" or "yesterday")
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List the entries of a day
    List {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Replace the text of an entry
    Edit {
        id: EntryId,
        text: String,

        #[arg(short, long)]
        date: Option<String>,
    },
    /// Mark an entry done, or undone if it already is
    Toggle {
        id: EntryId,

        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove an entry
    Delete {
        id: EntryId,

        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show a month with the days that have entries marked
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,
    },
    /// Print the current time
    Now {
        /// Keep printing every second until interrupted
        #[arg(long)]
        watch: bool,
    },
    /// Browse days and manage entries in a prompt loop
    Interactive,
    /// Show config paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Add { text, date } => commands::add::run(&text, date.as_deref()),
        Commands::List { date } => commands::list::run(date.as_deref()),
        Commands::Edit { id, text, date } => commands::edit::run(id, &text, date.as_deref()),
        Commands::Toggle { id, date } => commands::toggle::run(id, date.as_deref()),
        Commands::Delete { id, date } => commands::delete::run(id, date.as_deref()),
        Commands::Month { month } => commands::month::run(month.as_deref()),
        Commands::Now { watch } => commands::now::run(watch),
        Commands::Interactive => commands::interactive::run(),
        Commands::Config => commands::config::run(),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()))
        .init();
}
