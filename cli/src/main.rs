mod data;
mod grid;
mod sample;
mod tui;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Parser};
use tilechart_core::{Range, StatusRecord, TileChart};

use crate::data::load_records;
use crate::tui::app::App;

#[derive(Parser)]
#[command(name = "tilechart")]
#[command(about = "Calendar tile grid of daily statuses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print one row of colored day tiles per month
    Render {
        #[command(flatten)]
        chart: ChartArgs,
        /// Print letters instead of ANSI colors
        #[arg(long)]
        plain: bool,
    },
    /// Show per-month status counts as a table
    Summary {
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Open the interactive grid with hover tooltips
    Tui {
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Print sample data (one record per day) as JSON
    Sample {
        /// Year to generate; defaults to the current year
        #[arg(long)]
        year: Option<i32>,
    },
}

#[derive(Args)]
struct ChartArgs {
    /// JSON file of {date, status} records; `-` reads stdin
    #[arg(long)]
    data: Option<PathBuf>,
    /// Months of lookback: 3, 6 or 12
    #[arg(long, default_value_t = Range::default())]
    range: Range,
    /// Render as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
}

impl ChartArgs {
    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn records(&self) -> Result<Vec<StatusRecord>> {
        load_records(self.data.as_deref())
    }
}

fn report_malformed(malformed: &[String]) {
    if !malformed.is_empty() {
        eprintln!(
            "Warning: {} record(s) with unreadable dates were skipped",
            malformed.len()
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { chart, plain } => {
            let records = chart.records()?;
            let rendered = TileChart::new(&records, chart.range).render_in(chart.today(), &Local);
            report_malformed(&rendered.malformed);
            grid::show_grid(&rendered.sections, !plain && io::stdout().is_terminal());
        }
        Commands::Summary { chart } => {
            let records = chart.records()?;
            let rendered = TileChart::new(&records, chart.range).render_in(chart.today(), &Local);
            report_malformed(&rendered.malformed);
            grid::show_summary(&rendered.summaries());
        }
        Commands::Tui { chart } => {
            let records = chart.records()?;
            let today = chart.today();
            let rendered = TileChart::new(&records, chart.range).render_in(today, &Local);
            report_malformed(&rendered.malformed);
            tui::run(App::new(rendered.sections, chart.range, today))?;
        }
        Commands::Sample { year } => {
            let year = year.unwrap_or_else(|| Local::now().year());
            let records = sample::sample_records(year);
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}
