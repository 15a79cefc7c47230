use anyhow::{Context, Result};
use api_log_ingest::{
    application::{ports::security::SecretStore, services::ApplicationServices},
    config::AppConfig,
    domain::api_log::ApiLogRepository,
    infrastructure::{
        database, repositories::PostgresApiLogRepository, security::secrets::ConfiguredSecretStore,
    },
    presentation::http::{
        routes::{RouterOptions, build_router_with_options},
        state::HttpState,
    },
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pool = database::init_pool(&config)
        .await
        .context("failed to connect to the log database")?;
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
    }

    let api_log_repo: Arc<dyn ApiLogRepository> = Arc::new(PostgresApiLogRepository::new(pool));
    let secrets: Arc<dyn SecretStore> =
        Arc::new(ConfiguredSecretStore::new(config.bearer_token()));

    let services = Arc::new(ApplicationServices::new(api_log_repo, secrets));
    let state = HttpState { services };

    let app = build_router_with_options(state, &RouterOptions::from(&config));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
