use super::prelude::*;

/// Handles the completion of an enrichment fetch.
///
/// Completions are applied whenever they arrive, also for places that have
/// been deselected or filtered out in the meantime — there is no stale
/// response guard. A successful completion may change the title or the
/// position, so the visible subset, the markers and the map center are
/// rederived afterwards.
pub fn apply_enrichment(
    state: &mut ListViewState,
    id: &Id,
    result: std::result::Result<EnrichmentFields, FetchError>,
) -> Result<Vec<Effect>> {
    let Some(place) = state.place_mut(id) else {
        return Err(Error::UnknownPlace);
    };
    let mut effects = Vec::new();
    match result {
        Ok(fields) => {
            let moved = place.apply_enrichment(fields);
            let new_pos = place.position;
            let before = state.filtered.clone();
            state.recompute();
            effects.extend(visibility_effects(&before, state));
            if moved && state.is_visible(id) {
                if let Some(pos) = new_pos {
                    effects.push(Effect::MoveMarker(id.clone(), pos));
                }
            }
            // An applied title change may have pushed the selected place
            // out of the visible subset.
            if let Some(selected) = state.selected.clone() {
                if !state.is_visible(&selected) {
                    state.selected = None;
                    effects.push(Effect::DeactivateMarker(selected));
                }
            }
            effects.push(Effect::SetMapCenter(state.map_center));
        }
        Err(err) => {
            log::warn!("Enrichment of place {id} failed: {err}");
            place.mark_enrichment_failed();
        }
    }
    Ok(effects)
}
