use crate::core::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter: the configured level for this crate, request spans from
/// `tower_http` only when running at debug or trace
fn default_directives(config: &LoggingConfig) -> String {
    let http_level = match config.level.as_str() {
        "trace" | "debug" => "debug",
        _ => "warn",
    };

    format!("{},users_api={},tower_http={}", config.level, config.level, http_level)
}

fn use_console(config: &LoggingConfig) -> bool {
    config.console || config.format == "console"
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    if use_console(config) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_line_number(true),
            )
            .try_init()
            .context("Failed to install console tracing subscriber")?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init()
            .context("Failed to install JSON tracing subscriber")?;
    }

    Ok(())
}
