use crate::{
    address::Address,
    category::Category,
    enrichment::{EnrichmentFields, EnrichmentStatus},
    geo::MapPoint,
    id::Id,
    rating::Rating,
};

/// One business shown in the list and on the map.
///
/// Created once at session start from the seed list and mutated in place
/// by the enrichment step; never destroyed during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// External identifier of the business, immutable after creation.
    pub id: Id,
    pub title: String,
    /// Absent until known from the seed data or an enrichment response.
    pub position: Option<MapPoint>,
    pub categories: Vec<Category>,
    pub review: Option<String>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub rating: Option<Rating>,
    pub enrichment: EnrichmentStatus,
}

impl Place {
    pub fn new(id: impl Into<Id>, title: impl Into<String>, position: Option<MapPoint>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            position,
            categories: vec![],
            review: None,
            address: None,
            phone: None,
            rating: None,
            enrichment: EnrichmentStatus::Pending,
        }
    }

    pub fn has_data(&self) -> bool {
        self.enrichment == EnrichmentStatus::Fetched
    }

    pub fn has_error(&self) -> bool {
        self.enrichment == EnrichmentStatus::Failed
    }

    /// Overwrites the detail fields with the supplied values and marks the
    /// place as enriched. Absent fields keep their prior values.
    ///
    /// Returns `true` if the position changed, so that the caller can push
    /// the new position to whatever renders this place on a map.
    pub fn apply_enrichment(&mut self, fields: EnrichmentFields) -> bool {
        let EnrichmentFields {
            title,
            categories,
            review_snippet,
            address,
            phone,
            rating,
            position,
        } = fields;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(categories) = categories {
            self.categories = categories;
        }
        if let Some(review_snippet) = review_snippet {
            self.review = Some(review_snippet);
        }
        if let Some(address) = address {
            self.address = Some(address);
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        if let Some(rating) = rating {
            self.rating = Some(rating);
        }
        let moved = position.is_some() && position != self.position;
        if position.is_some() {
            self.position = position;
        }
        self.enrichment = EnrichmentStatus::Fetched;
        moved
    }

    /// Marks the last enrichment attempt as failed. All other fields are
    /// left untouched.
    pub fn mark_enrichment_failed(&mut self) {
        self.enrichment = EnrichmentStatus::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_place_has_no_terminal_status() {
        let place = Place::new("rodneys-oyster-house", "Rodney's Oyster House", None);
        assert!(!place.has_data());
        assert!(!place.has_error());
    }

    #[test]
    fn apply_full_enrichment() {
        let mut place = Place::new(
            "guu-japanese-restaurant",
            "Guu",
            Some(MapPoint::from_lat_lng_deg(49.284_005, -123.125_435)),
        );
        let new_pos = MapPoint::from_lat_lng_deg(49.284_100, -123.125_500);
        let moved = place.apply_enrichment(EnrichmentFields {
            title: Some("Guu Japanese Restaurant".into()),
            categories: Some(vec!["Japanese".into(), "Tapas Bars".into()]),
            review_snippet: Some("Lively izakaya.".into()),
            address: Some(vec!["838 Thurlow St".to_string()].into()),
            phone: Some("(604) 685-8817".into()),
            rating: Some(Rating {
                value: 4.5.into(),
                image_url: None,
            }),
            position: Some(new_pos),
        });
        assert!(moved);
        assert!(place.has_data());
        assert!(!place.has_error());
        assert_eq!(place.title, "Guu Japanese Restaurant");
        assert_eq!(place.position, Some(new_pos));
        assert_eq!(place.categories.len(), 2);
    }

    #[test]
    fn partial_enrichment_keeps_prior_values() {
        let pos = MapPoint::from_lat_lng_deg(49.278_360, -123.098_231);
        let mut place = Place::new("phnom-penh", "Phnom Penh Restaurant", Some(pos));
        let moved = place.apply_enrichment(EnrichmentFields {
            phone: Some("(604) 682-5777".into()),
            ..Default::default()
        });
        assert!(!moved);
        assert!(place.has_data());
        assert_eq!(place.title, "Phnom Penh Restaurant");
        assert_eq!(place.position, Some(pos));
        assert_eq!(place.phone.as_deref(), Some("(604) 682-5777"));
    }

    #[test]
    fn failed_enrichment_keeps_seed_fields() {
        let pos = MapPoint::from_lat_lng_deg(49.270_616, -123.135_774);
        let mut place = Place::new("granville-island-brewing", "Granville Island Brewing", Some(pos));
        place.mark_enrichment_failed();
        assert!(place.has_error());
        assert!(!place.has_data());
        assert_eq!(place.title, "Granville Island Brewing");
        assert_eq!(place.position, Some(pos));
    }

    #[test]
    fn later_success_replaces_error_state() {
        let mut place = Place::new("landmark-hotpot-house", "Landmark Hot Pot House", None);
        place.mark_enrichment_failed();
        place.apply_enrichment(EnrichmentFields::default());
        assert!(place.has_data());
        assert!(!place.has_error());
    }
}
