pub mod docs;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod router;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use vaultboard_client::VaultSource;

use docs::ApiDoc;
use router::api_router;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn VaultSource>,
}

pub struct ApiService {
    state: AppState,
    host: String,
    port: u16,
}

impl ApiService {
    pub fn new(state: AppState, host: &str, port: u16) -> Self {
        Self {
            state,
            host: host.to_owned(),
            port,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        ApiDoc::generate_openapi_json("./".into())?;

        let address = format!("{}:{}", self.host, self.port);
        let socket_addr: SocketAddr = address.parse()?;
        let listener = TcpListener::bind(socket_addr).await?;

        let app = api_router::<ApiDoc>(self.state.clone())
            .with_state(self.state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        tracing::info!("🧩 API started at http://{}", socket_addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("😱 API server stopped!")
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}
