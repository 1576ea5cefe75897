use axum::http::HeaderValue;
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use usuarios_api::config::Config;
use usuarios_api::db::{self, UserStore};
use usuarios_api::router::{app_router, AppState};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        db_host = %cfg.db_host,
        db_user = %cfg.db_user,
        db_name = %cfg.db_name,
        cors_origin = %cfg.cors_origin,
        loglevel = %cfg.loglevel
    );

    let allowed_origin: HeaderValue = cfg.cors_origin.parse()?;

    let store = UserStore::new(db::mysql::connect_lazy(&cfg));

    let state = AppState::new(store);
    let app = app_router(state, allowed_origin);

    let addr = "0.0.0.0:5000";
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install ctrl-c handler");
    }
}
