use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

mod config;
mod engine;
mod feed;
mod report;

use config::Config;
use engine::{LeagueTable, LineOutcome, END_SENTINEL};
use feed::{FileSource, LineSource, StdinSource, SyntheticFixtures};
use report::OutputFormat;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging. Logs go to stderr because stdout
    // carries the rendered tables.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let source: Box<dyn LineSource> = match (&config.simulate, config.input.as_deref()) {
        (Some(rounds), _) => {
            info!(
                "Simulating {} matchday(s) for {} club(s){}",
                rounds,
                config.teams,
                config
                    .seed
                    .map(|s| format!(" (seed {})", s))
                    .unwrap_or_default()
            );
            Box::new(SyntheticFixtures::new(config.teams, *rounds, config.seed))
        }
        (None, None) | (None, Some("-")) => Box::new(StdinSource::new()),
        (None, Some(path)) => Box::new(FileSource::open(path).await?),
    };

    let limit = if config.top == 0 {
        None
    } else {
        Some(config.top)
    };

    let mut table = LeagueTable::new();
    let mut accepted: u64 = 0;
    let mut skipped: u64 = 0;

    let (mut rx, pump) = feed::start_line_feed(source);
    while let Some(line) = rx.recv().await {
        match table.process_line(&line.text) {
            LineOutcome::Accepted => {
                accepted += 1;
                emit_if_closed(&table, limit, &config.format);
            }
            LineOutcome::Rejected(reason) => {
                if config.strict {
                    anyhow::bail!("line {}: {} ({:?})", line.number, reason, line.text);
                }
                skipped += 1;
                warn!("Skipping line {}: {} ({:?})", line.number, reason, line.text);
            }
        }
    }

    // The channel closes on EOF and on read failure alike; the pump result
    // tells them apart. A failed feed aborts here, before any final probe.
    pump.await??;

    // A feed that ends exactly on a matchday boundary may omit the final
    // sentinel; probe once so the last full table still gets printed. The
    // probe is skipped when the feed's own last line already closed it.
    if accepted > 0 && !table.is_matchday_complete() {
        table.process_line(END_SENTINEL);
        emit_if_closed(&table, limit, &config.format);
    }

    info!(
        "Feed finished: {} line(s) applied, {} skipped, {} club(s), {} matchday(s) closed",
        accepted,
        skipped,
        table.standings().len(),
        table.completed_matchdays()
    );
    Ok(())
}

/// Print the latest snapshot when the table just closed a matchday.
fn emit_if_closed(table: &LeagueTable, limit: Option<usize>, format: &OutputFormat) {
    if let Some(snapshot) = table.matchday_snapshot(limit) {
        print!("{}", report::render(table.completed_matchdays(), snapshot, format));
    }
}
