use super::prelude::*;

/// Toggles the selection.
///
/// Clicking the selected place deselects it; clicking another place moves
/// the selection there. Entering the selected state always requests a
/// fresh enrichment fetch, even if an earlier one is still outstanding —
/// requests are never coalesced.
///
/// Only places in the current visible subset are selectable.
pub fn select_place(state: &mut ListViewState, id: &Id) -> Result<Vec<Effect>> {
    if state.place(id).is_none() {
        return Err(Error::UnknownPlace);
    }
    if !state.is_visible(id) {
        return Err(Error::PlaceNotVisible);
    }
    let mut effects = Vec::new();
    match state.selected.take() {
        Some(prev) if prev == *id => {
            effects.push(Effect::DeactivateMarker(prev));
        }
        prev => {
            if let Some(prev) = prev {
                effects.push(Effect::DeactivateMarker(prev));
            }
            state.selected = Some(id.clone());
            effects.push(Effect::ActivateMarker(id.clone()));
            effects.push(Effect::FetchEnrichment(id.clone()));
        }
    }
    Ok(effects)
}
