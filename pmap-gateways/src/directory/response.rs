use pmap_entities::{enrichment::EnrichmentFields, geo::MapPoint, rating::Rating};
use serde::Deserialize;

/// The subset of the directory's business document that the page displays.
/// Everything else in the response is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct Business {
    pub name: Option<String>,
    pub snippet_text: Option<String>,
    pub display_phone: Option<String>,
    pub rating: Option<f64>,
    pub rating_img_url: Option<String>,
    #[serde(default)]
    pub categories: Vec<Vec<String>>,
    pub location: Option<Location>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Location {
    #[serde(default)]
    pub display_address: Vec<String>,
    pub coordinate: Option<Coordinate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Business> for EnrichmentFields {
    fn from(from: Business) -> Self {
        let Business {
            name,
            snippet_text,
            display_phone,
            rating,
            rating_img_url,
            categories,
            location,
        } = from;
        // Categories arrive as (label, alias) pairs; only the label is kept.
        let categories = if categories.is_empty() {
            None
        } else {
            Some(
                categories
                    .iter()
                    .filter_map(|pair| pair.first())
                    .map(|label| label.as_str().into())
                    .collect(),
            )
        };
        let rating = rating.map(|value| Rating {
            value: value.into(),
            image_url: rating_img_url.and_then(|u| u.parse().ok()),
        });
        let (address, position) = match location {
            Some(Location {
                display_address,
                coordinate,
            }) => {
                let address = if display_address.is_empty() {
                    None
                } else {
                    Some(display_address.into())
                };
                let position = coordinate
                    .and_then(|c| MapPoint::try_from_lat_lng_deg(c.latitude, c.longitude));
                (address, position)
            }
            None => (None, None),
        };
        Self {
            title: name,
            categories,
            review_snippet: snippet_text,
            address,
            phone: display_phone,
            rating,
            position,
        }
    }
}
