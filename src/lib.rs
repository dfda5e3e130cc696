pub mod api;
pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::countries::CountryList;
use crate::core::cache::Cache;
use crate::core::config::AppConfig;
use crate::core::{
    ComparisonRequest, ComparisonService, CountryCodeResolver, ExchangeRateClient,
    ReferenceDataStore, SystemClock,
};
use crate::providers::currency_api::CurrencyApiProvider;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub enum AppCommand {
    Serve { host: Option<String>, port: Option<u16> },
    Compare(ComparisonRequest),
    Countries(CountryList),
}

/// Loads both datasets and wires the rate client against the configured API.
pub fn build_service(config: &AppConfig) -> Result<ComparisonService> {
    let store = ReferenceDataStore::load(&config.data.indicators, &config.data.ladders)
        .context("Failed to load reference data")?;

    let api = &config.providers.currency_api;
    let source = CurrencyApiProvider::new(&api.base_url, Duration::from_secs(api.timeout_secs))?;
    let rates = ExchangeRateClient::new(
        Arc::new(source),
        Arc::new(Cache::new()),
        Arc::new(SystemClock),
        api.lookback_days,
    );

    Ok(ComparisonService::new(
        Arc::new(store),
        Arc::new(CountryCodeResolver::new()),
        Arc::new(rates),
    ))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("wealthrank starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let service = build_service(&config)?;

    match command {
        AppCommand::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let state = api::AppState {
                service: Arc::new(service),
            };
            api::run_server(state, &host, port).await
        }
        AppCommand::Compare(request) => cli::compare::run(&service, &request).await,
        AppCommand::Countries(list) => cli::countries::run(&service, list).await,
    }
}
