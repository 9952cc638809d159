use anyhow::{Context, Result};
use tracing::info;

use crate::core::state::AppState;

/// Insert the fixture users listed in the configuration
pub fn seed_from_config(state: &AppState) -> Result<usize> {
    let seeds = &state.config.store.seed;
    if seeds.is_empty() {
        return Ok(0);
    }

    let added = state
        .store
        .seed(seeds.iter().map(|s| (s.name.as_str(), s.bio.as_str())))
        .context("Failed to seed user store")?;

    info!(users = added, "Seeded user store from config");

    Ok(added)
}
