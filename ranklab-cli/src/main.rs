//! Ranking CLI — leaderboard, series export, and snapshot commands.
//!
//! Commands:
//! - `top` — print the canonical leaderboard at a reference point
//! - `series` — export a view's chart series as JSON or CSV
//! - `snapshot fetch` — pull all three feeds from the backend into a file
//! - `snapshot demo` — write a seeded sample snapshot to a file

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate};
use clap::{Args, Parser, Subcommand};

use ranklab_client::{fetch_snapshot, sample_snapshot, ApiClient, ClientConfig, DashboardSnapshot};
use ranklab_core::engine::{
    build_daily_view, build_general_view, build_period_view, rank_by_period_index, ChartModel,
    ViewMode, LEADERBOARD_SIZE,
};
use ranklab_core::fingerprint::series_digest;

#[derive(Parser)]
#[command(name = "ranklab", about = "Trading-agent ROI ranking and chart-series tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical leaderboard at a reference point.
    Top {
        #[command(flatten)]
        source: Source,

        /// Reference period end date (YYYY-MM-DD). Defaults to the latest.
        #[arg(long)]
        date: Option<String>,

        /// Rank by positional period slot instead of end date.
        #[arg(long, conflicts_with = "date")]
        index: Option<usize>,

        /// Number of rows to print.
        #[arg(long, default_value_t = LEADERBOARD_SIZE)]
        count: usize,
    },
    /// Export a view's chart series as JSON or CSV.
    Series {
        #[command(flatten)]
        source: Source,

        /// View mode: by-period, by-period-cumulative, daily, general-aggregate.
        #[arg(long, default_value = "by-period", value_parser = parse_view)]
        view: ViewMode,

        /// Output format: json or csv.
        #[arg(long, default_value = "json")]
        format: String,

        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Snapshot management commands.
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },
}

#[derive(Subcommand)]
enum SnapshotAction {
    /// Fetch all three feeds from the backend and save them to a file.
    Fetch {
        /// TOML config file with base URL, hypothesis, and date range.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file.
        #[arg(long, default_value = "snapshot.json")]
        output: PathBuf,
    },
    /// Write a seeded sample snapshot to a file.
    Demo {
        /// Seed for the generator. Same seed, same data.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file.
        #[arg(long, default_value = "snapshot.json")]
        output: PathBuf,
    },
}

/// Where the snapshot comes from. Exactly one of file or demo.
#[derive(Args)]
struct Source {
    /// Load a previously saved snapshot file.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Use seeded sample data instead of a file.
    #[arg(long)]
    demo: bool,

    /// Seed for --demo.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

impl Source {
    fn load(&self) -> Result<DashboardSnapshot> {
        match (&self.input, self.demo) {
            (Some(path), false) => DashboardSnapshot::read_from(path)
                .with_context(|| format!("failed to load snapshot from {}", path.display())),
            (None, true) => Ok(sample_snapshot(self.seed)),
            (None, false) => bail!("no snapshot source: pass --input <file> or --demo"),
            (Some(_), true) => bail!("--input and --demo are mutually exclusive"),
        }
    }
}

fn parse_view(s: &str) -> Result<ViewMode, String> {
    match s {
        "by-period" => Ok(ViewMode::ByPeriod),
        "by-period-cumulative" | "cumulative" => Ok(ViewMode::ByPeriodCumulative),
        "daily" => Ok(ViewMode::Daily),
        "general-aggregate" | "general" => Ok(ViewMode::GeneralAggregate),
        other => Err(format!(
            "unknown view {other:?} (expected by-period, by-period-cumulative, daily, general-aggregate)"
        )),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Top {
            source,
            date,
            index,
            count,
        } => run_top(&source, date.as_deref(), index, count),
        Commands::Series {
            source,
            view,
            format,
            output,
        } => run_series(&source, view, &format, output.as_deref()),
        Commands::Snapshot { action } => match action {
            SnapshotAction::Fetch { config, output } => run_fetch(config.as_deref(), &output),
            SnapshotAction::Demo { seed, output } => {
                sample_snapshot(seed).write_to(&output)?;
                println!("Wrote demo snapshot to {}", output.display());
                Ok(())
            }
        },
    }
}

fn run_top(source: &Source, date: Option<&str>, index: Option<usize>, count: usize) -> Result<()> {
    let snapshot = source.load()?;

    let ranking = if let Some(slot) = index {
        rank_by_period_index(&snapshot.agents, slot)
    } else {
        let reference = match date {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("invalid date {s:?}"))?,
            None => match ranklab_core::engine::latest_end_date(&snapshot.agents) {
                Some(end) => end,
                None => bail!("snapshot has no periods to rank"),
            },
        };
        ranklab_core::engine::rank(&snapshot.agents, reference)
    };

    println!("{:>4}  {:<20} {:<10} {:>10}  {}", "#", "User", "Symbol", "ROI", "State");
    for entry in ranking.iter().take(count) {
        let state = match entry.state {
            Some(s) if s.is_expelled() => "EXPELLED",
            _ => "",
        };
        println!(
            "{:>4}  {:<20} {:<10} {:>9.2}%  {}",
            entry.position, entry.user_id, entry.symbol, entry.roi, state
        );
    }
    Ok(())
}

fn run_series(source: &Source, view: ViewMode, format: &str, output: Option<&Path>) -> Result<()> {
    let snapshot = source.load()?;
    let model = build_model(&snapshot, view);

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&model.series)?,
        "csv" => series_csv(&model)?,
        other => bail!("unknown format {other:?} (expected json or csv)"),
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("Wrote {} series to {}", model.series.len(), path.display());
        }
        None => println!("{rendered}"),
    }

    eprintln!("digest: {}", series_digest(&model.series));
    eprintln!("spread: {}", model.spread);
    Ok(())
}

fn build_model(snapshot: &DashboardSnapshot, view: ViewMode) -> ChartModel {
    match view {
        ViewMode::ByPeriod => build_period_view(&snapshot.agents, false),
        ViewMode::ByPeriodCumulative => build_period_view(&snapshot.agents, true),
        ViewMode::Daily => build_daily_view(&snapshot.daily, &snapshot.agents),
        ViewMode::GeneralAggregate => build_general_view(&snapshot.general),
    }
}

fn series_csv(model: &ChartModel) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["label", "position", "color", "date", "value"])?;

    for series in &model.series {
        let position = series
            .position
            .map(|p| p.to_string())
            .unwrap_or_default();
        for point in &series.points {
            let date = DateTime::from_timestamp_millis(point.x)
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            writer.write_record([
                series.label.as_str(),
                position.as_str(),
                series.color.as_str(),
                date.as_str(),
                &point.y.to_string(),
            ])?;
        }
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

fn run_fetch(config_path: Option<&Path>, output: &Path) -> Result<()> {
    let config = ClientConfig::load_or_default(config_path)?;
    let client = ApiClient::new(&config)?;

    let snapshot = fetch_snapshot(&client, &config)
        .with_context(|| format!("fetch from {} failed", config.base_url))?;

    snapshot.write_to(output)?;
    println!(
        "Saved snapshot ({} agents, {} daily, {} general days) to {}",
        snapshot.agents.len(),
        snapshot.daily.len(),
        snapshot.general.len(),
        output.display()
    );
    Ok(())
}
