//! Fluxo Reporter
//!
//! Reads one JSON ledger snapshot and prints the rendered dashboard as JSON.
//!
//! ```text
//! fluxo <snapshot.json> [YYYY-MM-DD]
//! ```

use chrono::NaiveDate;
use fluxo_core::dashboard::{DashboardParams, DashboardService, DashboardView};
use fluxo_core::store::InMemoryStore;
use fluxo_core::time::{Clock, FixedClock, SystemClock};
use fluxo_shared::{AppError, AppResult, EngineConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: fluxo <snapshot.json> [YYYY-MM-DD]";

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = EngineConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let view = run(&config, std::env::args().skip(1)).inspect_err(|err| {
        error!(code = err.error_code(), %err, "failed to render dashboard");
    })?;

    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}

/// Renders the dashboard for `<snapshot.json> [YYYY-MM-DD]`.
fn run(config: &EngineConfig, mut args: impl Iterator<Item = String>) -> AppResult<DashboardView> {
    let path = args
        .next()
        .ok_or_else(|| AppError::Validation(USAGE.to_string()))?;
    let clock: Box<dyn Clock> = match args.next() {
        Some(raw) => Box::new(FixedClock::on(parse_date(&raw)?)),
        None => Box::new(SystemClock),
    };

    let store = InMemoryStore::from_path(&path)?;
    info!(%path, "loaded ledger snapshot");

    let params = DashboardParams::current_month(&*clock);
    Ok(DashboardService::from_config(config).render_from_store(&store, &params)?)
}

fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("invalid date `{raw}`, expected YYYY-MM-DD")))
}
