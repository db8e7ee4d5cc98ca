use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pmap_core::gateways::directory::{DirectoryGateway, FetchError};
use pmap_entities::{enrichment::EnrichmentFields, id::Id, nonce::Nonce};

mod response;
pub mod signature;

pub use self::signature::Credentials;

/// Client of the business-directory API.
///
/// One authenticated GET per lookup, a fixed timeout bounding how long a
/// response is awaited. No retries, no backoff, no pagination.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::blocking::Client,
    base_url: String,
    credentials: Credentials,
}

impl DirectoryClient {
    pub fn new(
        base_url: impl Into<String>,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    fn business_url(&self, id: &Id) -> String {
        format!("{}/v2/business/{}", self.base_url, id)
    }

    fn oauth_params(&self, nonce: &Nonce, timestamp: u64) -> Vec<(&'static str, String)> {
        vec![
            ("oauth_consumer_key", self.credentials.consumer_key.clone()),
            ("oauth_token", self.credentials.token.clone()),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_timestamp", timestamp.to_string()),
            ("oauth_signature_method", "HMAC-SHA1".to_owned()),
            ("oauth_version", "1.0".to_owned()),
        ]
    }
}

impl DirectoryGateway for DirectoryClient {
    fn fetch_business(&self, id: &Id) -> Result<EnrichmentFields, FetchError> {
        let url = self.business_url(id);
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let mut params = self.oauth_params(&Nonce::new(), timestamp);
        let oauth_signature = signature::sign("GET", &url, &params, &self.credentials);
        params.push(("oauth_signature", oauth_signature));
        log::debug!("Fetching business {id} from the directory");
        let response = self.http.get(&url).query(&params).send().map_err(|err| {
            if err.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(err.to_string())
            }
        })?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Directory lookup of {id} failed with status {status}");
            return Err(FetchError::Http(status.as_u16()));
        }
        let business: response::Business = response.json().map_err(|err| {
            log::warn!("Malformed directory response for {id}: {err}");
            FetchError::Malformed
        })?;
        Ok(business.into())
    }
}
