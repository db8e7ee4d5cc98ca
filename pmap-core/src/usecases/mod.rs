use pmap_entities::{geo::MapPoint, id::Id};

use crate::view::ListViewState;

mod apply_enrichment;
mod error;
mod select_place;
mod set_filter_text;


pub type Result<T> = std::result::Result<T, Error>;

pub use self::{apply_enrichment::*, error::Error, select_place::*, set_filter_text::*};

/// Side effects requested by a view-state mutation.
///
/// The core never invokes a gateway itself: every mutation returns the
/// effects it requires and the application dispatches them to the map
/// widget and the directory client. Gateways are invoked as side effects
/// of view-state changes, never the reverse.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue a directory fetch for this place.
    FetchEnrichment(Id),
    SetMapCenter(MapPoint),
    ShowMarker(Id, MapPoint),
    HideMarker(Id),
    MoveMarker(Id, MapPoint),
    ActivateMarker(Id),
    DeactivateMarker(Id),
}

/// Marker updates for places that entered or left the visible subset
/// since `before` was captured.
pub(crate) fn visibility_effects(before: &[usize], state: &ListViewState) -> Vec<Effect> {
    let mut effects = Vec::new();
    for (i, place) in state.places.iter().enumerate() {
        let was_visible = before.contains(&i);
        let is_visible = state.filtered.contains(&i);
        match (was_visible, is_visible) {
            (false, true) => {
                if let Some(pos) = place.position {
                    effects.push(Effect::ShowMarker(place.id.clone(), pos));
                }
            }
            (true, false) => effects.push(Effect::HideMarker(place.id.clone())),
            _ => (),
        }
    }
    effects
}

mod prelude {
    pub(crate) use super::{error::Error, visibility_effects, Effect, Result};
    pub use crate::{gateways::directory::FetchError, view::ListViewState};
    pub use pmap_entities::{enrichment::*, geo::*, id::*, place::*};
}
