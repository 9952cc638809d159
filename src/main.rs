use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use users_api::core::config::Config;
use users_api::core::routes::build_router;
use users_api::core::server::{bind, run, shutdown_signal};
use users_api::core::startup::seed_from_config;
use users_api::core::state::AppState;
use users_api::core::tracing_init::init_tracing;

fn main() -> Result<()> {
    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    // Missing file means built-in defaults
    let config = Config::load_or_default(&config_path)
        .context(format!(
            "Failed to load configuration from '{}'",
            config_path.display()
        ))?;

    init_tracing(&config.logging)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.num_threads)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        port = config.server.port,
        num_threads = config.server.num_threads,
        prefix = %config.api.prefix,
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Users API starting"
    );

    let port = config.server.port;
    let state = AppState::new(config);

    seed_from_config(&state)?;

    let users = state.store.len().context("Failed to read user store")?;
    info!(users, "Users API startup complete");

    // Build the router with middleware
    let app = build_router(Arc::new(state)).layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        ),
    );

    let listener = bind(port).await?;

    info!("HTTP server started, waiting for shutdown signal");

    run(listener, app, shutdown_signal()).await?;

    info!("Shutting down gracefully");

    Ok(())
}
