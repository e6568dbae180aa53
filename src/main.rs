use axum::{routing::get, Router};
use chrono::Utc;
use dotenv::dotenv;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod csv_store;
mod domain;
mod error;
mod handlers;
mod infra;
mod usecases;

use crate::config::{Config, LogFormat};
use crate::csv_store::{FileCsvStore, InvestmentStore};
use crate::domain::repository::RepoResult;
use crate::infra::memory::repo::InMemoryRepo;
use crate::usecases::investment_service::InvestmentService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InvestmentService>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/investments/user/{userId}", get(handlers::get_user_investments))
        .route(
            "/api/investments/investment/{investmentId}",
            get(handlers::get_investment_details),
        )
        .route("/api/investments/health", get(handlers::health))
        .with_state(state)
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(fmt::layer().json().with_current_span(false)).init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).init(),
    }
}

fn build_repo(config: &Config) -> RepoResult<InMemoryRepo> {
    match &config.seed_csv {
        Some(path) => {
            let investments = FileCsvStore.read_investments(path)?;
            info!(path = %path.display(), count = investments.len(), "Loaded investment seed from CSV");
            InMemoryRepo::new(investments)
        }
        None => Ok(InMemoryRepo::seeded(Utc::now())),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let repo = build_repo(&config)?;
    info!(investments = repo.count(), "Investment store ready");

    let app_state = AppState {
        service: Arc::new(InvestmentService::new(Arc::new(repo))),
    };

    serve(app(app_state), config.host, config.port).await
}

async fn serve(app: Router, host: IpAddr, port: u16) -> anyhow::Result<()> {
    // Try to bind to the requested port; if it's in use, try a few subsequent ports.
    let max_attempts = 10;
    for offset in 0..max_attempts {
        let Some(try_port) = port.checked_add(offset) else {
            break;
        };
        let addr = SocketAddr::new(host, try_port);
        match tokio::net::TcpListener::bind(&addr).await {
            Ok(listener) => {
                info!(%addr, "Listening");
                axum::serve(listener, app).await?;
                return Ok(());
            }
            Err(e) => {
                warn!(port = try_port, error = %e, "Port unavailable, trying next");
            }
        }
    }
    error!("Failed to bind to any port in range {}..{}", port, port.saturating_add(max_attempts - 1));
    anyhow::bail!("no free port starting at {}", port)
}
