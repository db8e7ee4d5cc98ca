use pmap_entities::{geo::MapPoint, id::Id, place::Place};

use crate::{center::compute_center, filter::passes_filter};

/// Authoritative view state of the place list.
///
/// Owns all places, the free-text filter and the selection, and caches the
/// two derived values: the filtered subset (as indices into `places`, so
/// the original order is preserved by construction) and the map center.
///
/// The cache is refreshed by [`recompute`](Self::recompute), which every
/// mutating usecase calls before returning; reads are plain accessors.
#[derive(Debug, Clone)]
pub struct ListViewState {
    pub(crate) places: Vec<Place>,
    pub(crate) filter_text: String,
    pub(crate) selected: Option<Id>,
    pub(crate) filtered: Vec<usize>,
    pub(crate) map_center: MapPoint,
    pub(crate) fallback_center: MapPoint,
}

impl ListViewState {
    pub fn new(places: Vec<Place>, fallback_center: MapPoint) -> Self {
        let mut state = Self {
            places,
            filter_text: String::new(),
            selected: None,
            filtered: vec![],
            map_center: fallback_center,
            fallback_center,
        };
        state.recompute();
        state
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn place(&self, id: &Id) -> Option<&Place> {
        self.places.iter().find(|p| p.id == *id)
    }

    pub(crate) fn place_mut(&mut self, id: &Id) -> Option<&mut Place> {
        self.places.iter_mut().find(|p| p.id == *id)
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn selected(&self) -> Option<&Id> {
        self.selected.as_ref()
    }

    /// The ordered subsequence of all places that pass the current filter.
    pub fn filtered_places(&self) -> impl Iterator<Item = &Place> {
        self.filtered.iter().map(|&i| &self.places[i])
    }

    pub fn is_visible(&self, id: &Id) -> bool {
        self.filtered_places().any(|p| p.id == *id)
    }

    pub fn map_center(&self) -> MapPoint {
        self.map_center
    }

    /// Recomputes the filtered subset and the map center from the current
    /// places and filter text.
    pub(crate) fn recompute(&mut self) {
        self.filtered = self
            .places
            .iter()
            .enumerate()
            .filter(|(_, p)| passes_filter(p, &self.filter_text))
            .map(|(i, _)| i)
            .collect();
        let positions: Vec<_> = self
            .filtered
            .iter()
            .filter_map(|&i| self.places[i].position)
            .collect();
        self.map_center = compute_center(&positions, self.fallback_center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmap_entities::builders::*;

    #[test]
    fn initial_state_shows_all_places() {
        let places = vec![
            Place::build().id("a").title("A").finish(),
            Place::build().id("b").title("B").finish(),
        ];
        let state = ListViewState::new(places, MapPoint::default());
        assert_eq!(state.filtered_places().count(), 2);
        assert_eq!(state.filter_text(), "");
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn no_positions_falls_back_to_configured_center() {
        let fallback = MapPoint::from_lat_lng_deg(49.2827, -123.1207);
        let state = ListViewState::new(vec![Place::build().no_pos().finish()], fallback);
        assert_eq!(state.map_center(), fallback);
    }
}
