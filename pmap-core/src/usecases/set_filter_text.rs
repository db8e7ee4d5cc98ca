use super::prelude::*;

/// Replaces the filter text and rederives the visible subset and the map
/// center. Any selection is dropped unconditionally, even if the selected
/// place would still pass the new filter.
pub fn set_filter_text(state: &mut ListViewState, text: impl Into<String>) -> Vec<Effect> {
    let mut effects = Vec::new();
    if let Some(prev) = state.selected.take() {
        effects.push(Effect::DeactivateMarker(prev));
    }
    state.filter_text = text.into();
    let before = state.filtered.clone();
    state.recompute();
    effects.extend(visibility_effects(&before, state));
    effects.push(Effect::SetMapCenter(state.map_center));
    effects
}
