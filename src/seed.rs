use pmap_entities::{geo::MapPoint, place::Place};

/// The fixed list of places shown at session start. Detail fields are
/// filled in later by the directory lookups.
pub fn default_places() -> Vec<Place> {
    vec![
        Place::new(
            "phnom-penh-vancouver",
            "Phnom Penh Restaurant",
            Some(MapPoint::from_lat_lng_deg(49.278_360, -123.098_231)),
        ),
        Place::new(
            "guu-original-thurlow-vancouver",
            "Guu Japanese Restaurant",
            Some(MapPoint::from_lat_lng_deg(49.284_005, -123.125_435)),
        ),
        Place::new(
            "rodneys-oyster-house-vancouver",
            "Rodney's Oyster House",
            Some(MapPoint::from_lat_lng_deg(49.274_307, -123.123_136)),
        ),
        Place::new(
            "landmark-hotpot-house-vancouver",
            "Landmark Hot Pot House",
            Some(MapPoint::from_lat_lng_deg(49.249_836, -123.115_540)),
        ),
        Place::new(
            "granville-island-brewing-vancouver",
            "Granville Island Brewing",
            Some(MapPoint::from_lat_lng_deg(49.270_616, -123.135_774)),
        ),
    ]
}
