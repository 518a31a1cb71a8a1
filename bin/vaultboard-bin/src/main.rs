mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use vaultboard_api::{ApiService, AppState};
use vaultboard_client::KrystalClient;

use crate::cli::VaultboardCli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let VaultboardCli {
        vaults_api_base_url,
        api_host,
        api_port,
    } = VaultboardCli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let source = KrystalClient::new(&vaults_api_base_url)?;
    let app_state = AppState {
        source: Arc::new(source),
    };

    ApiService::new(app_state, &api_host, api_port).run().await
}
