mod event;
pub mod print;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use crate::services::{upcoming_events, CalendarGridBuilder, Config, EventStore};
use crate::types::{parse_iso_date, ViewMode};

use event::{AddArgs, DeleteArgs};

/// Back-office calendar for bakery orders, catering, training and holidays
#[derive(Parser)]
#[command(name = "bakecal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Treat this date (YYYY-MM-DD) as today instead of the system clock
    #[arg(long, global = true, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    /// Events file (overrides the config file)
    #[arg(long, global = true, value_name = "FILE")]
    events: Option<PathBuf>,

    /// Config file (default: ~/.bakecal/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive calendar (default)
    Tui,

    /// Print the month grid containing DATE
    Month(ViewArgs),

    /// Print the week containing DATE
    Week(ViewArgs),

    /// Print the agenda for DATE
    Day(ViewArgs),

    /// Print the next non-holiday events from today on
    Upcoming {
        /// Maximum number of events (default from config)
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an event
    Add(AddArgs),

    /// Delete an event
    Delete(DeleteArgs),

    /// Replace the events file with sample bakery events
    Seed,
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Date to show (YYYY-MM-DD, default: today)
    #[arg(value_parser = parse_date_arg)]
    date: Option<NaiveDate>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_iso_date(s).map_err(|e| e.to_string())
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let store = config.event_store(self.events.as_deref())?;
        tracing::debug!(%today, path = %store.path().display(), "resolved calendar context");

        match self.command {
            None | Some(Commands::Tui) => {
                let events = store.load()?;
                crate::tui::run(today, events, &config)
            }
            Some(Commands::Month(args)) => print_view(&store, today, ViewMode::Month, args),
            Some(Commands::Week(args)) => print_view(&store, today, ViewMode::Week, args),
            Some(Commands::Day(args)) => print_view(&store, today, ViewMode::Day, args),
            Some(Commands::Upcoming { limit, json }) => {
                let events = store.load()?;
                let limit = limit.unwrap_or(config.upcoming_limit);
                let upcoming = upcoming_events(&events, today, limit);
                if json {
                    println!("{}", serde_json::to_string_pretty(&upcoming)?);
                } else {
                    print!("{}", print::format_upcoming(&upcoming));
                }
                Ok(())
            }
            Some(Commands::Add(args)) => Ok(args.run(&store)?),
            Some(Commands::Delete(args)) => Ok(args.run(&store)?),
            Some(Commands::Seed) => {
                let events = store.seed(today)?;
                println!(
                    "Seeded {} events into {}",
                    events.len(),
                    store.path().display()
                );
                Ok(())
            }
        }
    }
}

fn print_view(
    store: &EventStore,
    today: NaiveDate,
    mode: ViewMode,
    args: ViewArgs,
) -> anyhow::Result<()> {
    let events = store.load()?;
    let reference = args.date.unwrap_or(today);
    let cells = CalendarGridBuilder::new(today).build(mode, reference, &events);

    if args.json {
        match mode {
            ViewMode::Day => {
                if let Some(cell) = cells.first() {
                    println!("{}", serde_json::to_string_pretty(cell)?);
                }
            }
            _ => println!("{}", serde_json::to_string_pretty(&cells)?),
        }
        return Ok(());
    }

    let text = match mode {
        ViewMode::Month => print::format_month(&cells, reference),
        ViewMode::Week => print::format_week(&cells, reference),
        ViewMode::Day => cells.first().map(print::format_day).unwrap_or_default(),
    };
    print!("{}", text);
    Ok(())
}
