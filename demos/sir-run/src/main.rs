//! sir-run — run one epidemic from a preset or a TOML file and write CSV.
//!
//! ```text
//! sir-run --preset immunocompromised --days 120 --out output/ic
//! RUST_LOG=debug sir-run --config my_world.toml
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sir_agent::Population;
use sir_core::{Day, EpidemicConfig};
use sir_output::{CsvWriter, OutputWriter, SimOutputObserver};
use sir_sim::{DayCounts, SimBuilder, SimObserver, TimeSeries};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Preset {
    /// Uniform scatter, no immunocompromised agents.
    #[default]
    Baseline,
    /// Corner clusters, 30 % immunocompromised with longer infections.
    Immunocompromised,
}

#[derive(Parser, Debug)]
#[command(name = "sir-run", version, about = "Agent-based SIR epidemic simulation")]
struct Args {
    /// Built-in parameter set (ignored when --config is given).
    #[arg(long, value_enum, default_value_t = Preset::Baseline)]
    preset: Preset,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the last simulated day.
    #[arg(long)]
    days: Option<u32>,

    /// Write agent snapshots every N days (0 disables).
    #[arg(long)]
    snapshot_interval: Option<u32>,

    /// Output directory for the CSV files.
    #[arg(long, default_value = "output/sir-run")]
    out: PathBuf,
}

impl Args {
    fn into_config(self) -> Result<(EpidemicConfig, PathBuf)> {
        let mut config = match &self.config {
            Some(path) => EpidemicConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => match self.preset {
                Preset::Baseline => EpidemicConfig::baseline(),
                Preset::Immunocompromised => EpidemicConfig::immunocompromised(),
            },
        };
        if let Some(seed) = self.seed {
            config.run.seed = seed;
        }
        if let Some(days) = self.days {
            config.run.days = days;
        }
        if let Some(interval) = self.snapshot_interval {
            config.run.output_interval_days = interval;
        }
        Ok((config, self.out))
    }
}

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    count_rows:    usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, count_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_day_end(&mut self, day: Day, counts: &DayCounts) {
        self.count_rows += 1;
        self.inner.on_day_end(day, counts);
    }

    fn on_snapshot(&mut self, day: Day, population: &Population) {
        self.snapshot_rows += population.len();
        self.inner.on_snapshot(day, population);
    }

    fn on_sim_end(&mut self, final_day: Day, series: &TimeSeries) {
        self.inner.on_sim_end(final_day, series);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (config, out) = Args::parse().into_config()?;
    info!(
        width = config.world.width,
        height = config.world.height,
        agents = config.population.agent_count,
        seeded = config.population.initial_infected,
        layout = ?config.population.layout,
        "configuration loaded"
    );

    let mut sim = SimBuilder::new(config).build()?;

    let writer = CsvWriter::new(&out)
        .with_context(|| format!("opening output directory {}", out.display()))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  daily_counts.csv    : {} rows", obs.count_rows);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!();

    let series = sim.series();
    println!(
        "{:<6} {:>12} {:>12} {:>10} {:>10} {:>8}",
        "Day", "Susc.", "Susc. (IC)", "Infected", "Recovered", "New"
    );
    println!("{}", "-".repeat(63));
    let step = (series.len() / 20).max(1);
    for (i, row) in series.rows().iter().enumerate() {
        if i % step == 0 || i + 1 == series.len() {
            println!(
                "{:<6} {:>12} {:>12} {:>10} {:>10} {:>8}",
                row.day.0,
                row.susceptible_normal,
                row.susceptible_immunocompromised,
                row.infected,
                row.recovered,
                row.new_infections,
            );
        }
    }

    if let Some(peak) = series.peak_infected() {
        println!();
        println!("Peak: {} infected on day {}", peak.infected, peak.day.0);
    }

    Ok(())
}
