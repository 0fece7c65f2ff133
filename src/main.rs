//! One-shot render binary.
//!
//! Meant to be invoked by a timer (cron, systemd) or by the bridge
//! server's `/refresh` endpoint; each run renders one page and exits.

use std::process::ExitCode;

use inkboard::{Config, Driver, Error, Page, PpmSink};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match run() {
        Ok(page) => {
            tracing::info!("done, rendered page {}", page.token());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("render failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Page, Error> {
    let config = Config::from_env()?;
    let mut sink = PpmSink::new(config.output_path.clone());
    Driver::new(config).run(&mut sink)
}
