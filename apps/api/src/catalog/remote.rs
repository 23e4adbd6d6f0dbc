//! Listings REST backend client. Retries on 429 and 5xx with exponential backoff.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, OpportunityCatalog};
use crate::models::opportunity::OpportunityRequirement;

const MAX_RETRIES: u32 = 3;

/// The listings backend answers either with a bare array or an envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Bare(Vec<OpportunityRequirement>),
    Data { data: Vec<OpportunityRequirement> },
    Opportunities { opportunities: Vec<OpportunityRequirement> },
}

impl CatalogPayload {
    fn into_opportunities(self) -> Vec<OpportunityRequirement> {
        match self {
            CatalogPayload::Bare(list)
            | CatalogPayload::Data { data: list }
            | CatalogPayload::Opportunities {
                opportunities: list,
            } => list,
        }
    }
}

#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HttpCatalog {
    pub fn new(url: String, token: Option<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, url, token })
    }

    async fn fetch_once(&self) -> Result<reqwest::Response, reqwest::Error> {
        let mut request = self.client.get(&self.url).header("accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request.send().await
    }
}

#[async_trait]
impl OpportunityCatalog for HttpCatalog {
    async fn list(&self) -> Result<Vec<OpportunityRequirement>, CatalogError> {
        let mut last_error: Option<CatalogError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 500ms, 1s
                let delay = Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "Catalog fetch attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.fetch_once().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(CatalogError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Listings API returned {}: {}", status, body);
                last_error = Some(CatalogError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(CatalogError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = response.text().await?;
            let opportunities = parse_payload(&body)?;
            debug!("Fetched {} opportunities from listings API", opportunities.len());
            return Ok(opportunities);
        }

        Err(last_error.unwrap_or(CatalogError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }

    fn source(&self) -> &'static str {
        "http"
    }
}

fn parse_payload(body: &str) -> Result<Vec<OpportunityRequirement>, CatalogError> {
    let payload: CatalogPayload = serde_json::from_str(body)?;
    Ok(payload.into_opportunities())
}
