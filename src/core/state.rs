// Application state (AppState)

use crate::core::config::Config;
use crate::stores::user_store::UserStore;
use crate::utils::id::{IdGenerator, ShortIdGenerator};
use std::sync::Arc;

/// Shared application state
///
/// Cloned into every request handler; the store itself is shared.
#[derive(Clone)]
pub struct AppState {
    /// Record store holding all users
    pub store: Arc<UserStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ids = Arc::new(ShortIdGenerator::new(config.store.id_length));
        Self::with_id_generator(config, ids)
    }

    /// Build state around a caller-supplied id generator
    pub fn with_id_generator(config: Config, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: Arc::new(UserStore::new(ids)),
            config: Arc::new(config),
        }
    }
}
