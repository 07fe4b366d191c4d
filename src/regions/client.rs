//! Client for the GeoDB Cities nearby-divisions endpoint, which supplies
//! the selectable county list.

use crate::regions::error::RegionError;
use crate::types::location::{County, LatLon};
use log::info;
use reqwest::Client;
use serde::Deserialize;

const GEODB_HOST: &str = "wft-geo-db.p.rapidapi.com";

// GeoDB reports this subdivision near the search origin; it is a gated
// community, not a county, and the original deployment hid it.
const EXCLUDED_DIVISIONS: [&str; 1] = ["County Club Acres"];

/// Configuration for the region/county list source.
#[derive(Debug, Clone)]
pub struct RegionConfig {
    /// RapidAPI key; falls back to the `RAPIDAPI_KEY` environment variable.
    pub api_key: Option<String>,
    /// Center of the nearby-divisions search.
    pub search_origin: LatLon,
    pub radius_miles: u32,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            // Between the three counties, west of Fort Lauderdale.
            search_origin: LatLon(26.1901, -80.3659),
            radius_miles: 50,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DivisionsResponse {
    data: Vec<Division>,
}

#[derive(Debug, Deserialize)]
struct Division {
    name: String,
}

/// Client for the enumerable set of selectable counties.
pub struct RegionClient {
    config: RegionConfig,
    http: Client,
}

impl RegionClient {
    pub fn new(config: RegionConfig) -> RegionClient {
        RegionClient {
            config,
            http: Client::new(),
        }
    }

    /// Lists the division names near the configured origin, with known
    /// non-county artifacts filtered out.
    pub async fn division_names(&self) -> Result<Vec<String>, RegionError> {
        let api_key = self
            .config
            .api_key
            .clone()
            .or_else(|| std::env::var("RAPIDAPI_KEY").ok())
            .ok_or(RegionError::MissingApiKey)?;

        // GeoDB location syntax concatenates latitude and signed longitude.
        let url = format!(
            "https://{}/v1/geo/locations/{}{:+}/nearbyDivisions",
            GEODB_HOST, self.config.search_origin.0, self.config.search_origin.1
        );
        info!("Fetching nearby divisions from {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("radius", self.config.radius_miles.to_string()),
                ("distanceUnit", "MI".to_string()),
            ])
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", GEODB_HOST)
            .send()
            .await
            .map_err(|e| RegionError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    RegionError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    RegionError::NetworkRequest(url, e)
                });
            }
        };

        let parsed = response
            .json::<DivisionsResponse>()
            .await
            .map_err(|e| RegionError::ResponseDecode { url, source: e })?;

        Ok(filter_divisions(parsed.data))
    }

    /// Lists the known counties reported near the configured origin.
    pub async fn counties(&self) -> Result<Vec<County>, RegionError> {
        let names = self.division_names().await?;
        Ok(names.iter().filter_map(|n| County::from_name(n)).collect())
    }
}

fn filter_divisions(divisions: Vec<Division>) -> Vec<String> {
    divisions
        .into_iter()
        .map(|d| d.name)
        .filter(|name| !EXCLUDED_DIVISIONS.contains(&name.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_division_payload_and_filters_artifacts() {
        let json = r#"{
            "data": [
                {"name": "Palm Beach County"},
                {"name": "County Club Acres"},
                {"name": "Broward County"},
                {"name": "Miami-Dade County"}
            ]
        }"#;
        let parsed: DivisionsResponse = serde_json::from_str(json).unwrap();
        let names = filter_divisions(parsed.data);
        assert_eq!(
            names,
            ["Palm Beach County", "Broward County", "Miami-Dade County"].map(String::from)
        );
        let counties: Vec<_> = names.iter().filter_map(|n| County::from_name(n)).collect();
        assert_eq!(counties, County::ALL.to_vec());
    }

    #[tokio::test]
    async fn missing_api_key_is_its_own_error() {
        // Only meaningful when the env var is absent.
        if std::env::var("RAPIDAPI_KEY").is_ok() {
            return;
        }
        let client = RegionClient::new(RegionConfig::default());
        let err = client.division_names().await.unwrap_err();
        assert!(matches!(err, RegionError::MissingApiKey));
    }
}
