//! HTTP client for the Wikidata SPARQL endpoint.

use crate::attractions::error::AttractionError;
use crate::attractions::query::attraction_query;
use crate::attractions::response::{Attraction, SparqlResponse};
use crate::types::location::County;
use log::info;
use reqwest::Client;

const SPARQL_URL: &str = "https://query.wikidata.org/sparql";

// The Wikimedia query service rejects requests without an identifying agent.
const USER_AGENT: &str = concat!("soflo/", env!("CARGO_PKG_VERSION"));

/// Client for the attraction lookup source.
///
/// Entirely outside the aggregation core; consumed only by the UI layer to
/// populate a map.
pub struct AttractionClient {
    http: Client,
}

impl AttractionClient {
    pub fn new() -> AttractionClient {
        AttractionClient {
            http: Client::new(),
        }
    }

    /// Fetches the tourist attractions of a county.
    ///
    /// Bindings with malformed coordinates are skipped; an empty result is
    /// a valid answer, not an error.
    pub async fn attractions(&self, county: County) -> Result<Vec<Attraction>, AttractionError> {
        let query = attraction_query(county);
        info!("Querying attractions for {}", county);

        let response = self
            .http
            .get(SPARQL_URL)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[("format", "json"), ("query", &query)])
            .send()
            .await
            .map_err(|e| AttractionError::NetworkRequest(SPARQL_URL.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    AttractionError::HttpStatus {
                        url: SPARQL_URL.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    AttractionError::NetworkRequest(SPARQL_URL.to_string(), e)
                });
            }
        };

        let parsed = response
            .json::<SparqlResponse>()
            .await
            .map_err(|e| AttractionError::ResponseDecode {
                url: SPARQL_URL.to_string(),
                source: e,
            })?;

        let attractions = parsed.into_attractions();
        info!("Found {} attractions in {}", attractions.len(), county);
        Ok(attractions)
    }
}

impl Default for AttractionClient {
    fn default() -> Self {
        Self::new()
    }
}
