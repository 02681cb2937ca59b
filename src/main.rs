use anyhow::{Context, Result};
use release_stats::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

// Usage: release-stats [EVENTS_PATH]
//   EVENTS_PATH  overrides input.path from config
fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("{} {}", version::NAME, version::VERSION);

    let mut app_config = config::AppConfig::load()?;
    if let Some(path) = std::env::args().nth(1) {
        app_config.input.path = path;
    }

    let records = record_source::load_file(&app_config.input.path, app_config.input.skip_invalid)?;

    let mut store = AggregationStore::new();
    for record in &records {
        store.ingest(&record.version, record.sample());
    }
    if store.is_empty() {
        tracing::warn!("no health checks ingested; best/worst release unavailable");
    }

    let report = report::Report::build(&mut store).context("aggregating health checks")?;
    println!(
        "{}",
        report.render(app_config.output.format, app_config.output.timezone)?
    );
    Ok(())
}
