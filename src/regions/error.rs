use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegionError {
    #[error("No RapidAPI key configured; set RAPIDAPI_KEY or supply one in RegionConfig")]
    MissingApiKey,

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode division list for {url}")]
    ResponseDecode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
