use crate::{address::Address, category::Category, geo::MapPoint, rating::Rating};

/// Detail fields produced by a successful directory lookup.
///
/// Every field is optional: the directory may omit any of them and the
/// consumer keeps whatever value it already had for absent fields.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EnrichmentFields {
    pub title: Option<String>,
    pub categories: Option<Vec<Category>>,
    pub review_snippet: Option<String>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub rating: Option<Rating>,
    pub position: Option<MapPoint>,
}

impl EnrichmentFields {
    pub fn is_empty(&self) -> bool {
        let Self {
            title,
            categories,
            review_snippet,
            address,
            phone,
            rating,
            position,
        } = self;
        title.is_none()
            && categories.is_none()
            && review_snippet.is_none()
            && address.is_none()
            && phone.is_none()
            && rating.is_none()
            && position.is_none()
    }
}

/// Terminal state of the last enrichment attempt for a place.
///
/// A single enum keeps the "has data" and "has error" flags mutually
/// exclusive by construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentStatus {
    /// No attempt has completed yet.
    #[default]
    Pending,
    /// The last attempt succeeded and its fields have been applied.
    Fetched,
    /// The last attempt failed; only seed fields are available.
    Failed,
}
