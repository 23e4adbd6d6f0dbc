use std::sync::Arc;

use crate::catalog::OpportunityCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable catalog source. Default: listings API, JSON file, or empty.
    pub catalog: Arc<dyn OpportunityCatalog>,
}
