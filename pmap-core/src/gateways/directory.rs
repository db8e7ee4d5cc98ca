use pmap_entities::{enrichment::EnrichmentFields, id::Id};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("The request timed out")]
    Timeout,
    #[error("The request failed with status {0}")]
    Http(u16),
    #[error("The response is malformed")]
    Malformed,
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Business-directory lookup: one authenticated GET per call,
/// no retries, no pagination.
pub trait DirectoryGateway {
    fn fetch_business(&self, id: &Id) -> Result<EnrichmentFields, FetchError>;
}
