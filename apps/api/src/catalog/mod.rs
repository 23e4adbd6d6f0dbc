//! Opportunity catalog: where the postings scored by the matcher come from.
//!
//! `AppState` holds an `Arc<dyn OpportunityCatalog>`, chosen at startup from
//! config: the listings REST backend when `OPPORTUNITY_API_URL` is set, else a
//! JSON file, else an empty in-memory catalog.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::opportunity::OpportunityRequirement;

pub mod memory;
pub mod remote;

pub use memory::StaticCatalog;
pub use remote::HttpCatalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Listings API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Listings API unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

/// A source of opportunity postings. Implementations return a fresh snapshot
/// per call; the matcher never mutates it.
#[async_trait]
pub trait OpportunityCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<OpportunityRequirement>, CatalogError>;

    /// Short label for logs and the health endpoint.
    fn source(&self) -> &'static str;
}

/// Picks the catalog backend from config.
pub fn build_catalog(config: &Config) -> anyhow::Result<Arc<dyn OpportunityCatalog>> {
    if let Some(url) = &config.opportunity_api_url {
        info!("Opportunity catalog: listings API at {url}");
        let catalog = HttpCatalog::new(
            url.clone(),
            config.opportunity_api_token.clone(),
            config.catalog_timeout_secs,
        )?;
        return Ok(Arc::new(catalog));
    }

    if let Some(path) = &config.catalog_path {
        let catalog = StaticCatalog::from_path(path)?;
        if catalog.is_empty() {
            warn!("Catalog file {path} contains no postings");
        }
        info!(
            "Opportunity catalog: {} postings loaded from {path}",
            catalog.len()
        );
        return Ok(Arc::new(catalog));
    }

    warn!("No OPPORTUNITY_API_URL or OPPORTUNITY_CATALOG_PATH set; catalog is empty");
    Ok(Arc::new(StaticCatalog::default()))
}
