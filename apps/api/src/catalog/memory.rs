use std::path::Path;

use async_trait::async_trait;

use crate::catalog::{CatalogError, OpportunityCatalog};
use crate::models::opportunity::OpportunityRequirement;

/// Fixed in-memory catalog, optionally loaded from a JSON array on disk.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    opportunities: Vec<OpportunityRequirement>,
}

impl StaticCatalog {
    pub fn new(opportunities: Vec<OpportunityRequirement>) -> Self {
        Self { opportunities }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let opportunities: Vec<OpportunityRequirement> = serde_json::from_str(&raw)?;
        Ok(Self::new(opportunities))
    }

    pub fn len(&self) -> usize {
        self.opportunities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty()
    }
}

#[async_trait]
impl OpportunityCatalog for StaticCatalog {
    async fn list(&self) -> Result<Vec<OpportunityRequirement>, CatalogError> {
        Ok(self.opportunities.clone())
    }

    fn source(&self) -> &'static str {
        "static"
    }
}
