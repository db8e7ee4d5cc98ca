pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::place_builder::*;

pub mod place_builder {

    use super::*;
    use crate::{
        enrichment::EnrichmentStatus, geo::MapPoint, id::Id, place::Place, rating::Rating,
    };

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.place.title = title.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.position = Some(pos);
            self
        }
        pub fn no_pos(mut self) -> Self {
            self.place.position = None;
            self
        }
        pub fn categories(mut self, labels: Vec<impl Into<String>>) -> Self {
            self.place.categories = labels.into_iter().map(|l| l.into().into()).collect();
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.place.phone = Some(phone.into());
            self
        }
        pub fn rating(mut self, value: f64) -> Self {
            self.place.rating = Some(Rating {
                value: value.into(),
                image_url: None,
            });
            self
        }
        pub fn fetched(mut self) -> Self {
            self.place.enrichment = EnrichmentStatus::Fetched;
            self
        }
        pub fn failed(mut self) -> Self {
            self.place.enrichment = EnrichmentStatus::Failed;
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place::new(Id::new(), "", Some(MapPoint::from_lat_lng_deg(0.0, 0.0))),
            }
        }
    }
}
