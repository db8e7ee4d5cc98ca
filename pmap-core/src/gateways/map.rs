use pmap_entities::{geo::MapPoint, id::Id};

/// Capability interface of the mapping widget.
///
/// One implementation is selected at startup: a widget-backed one, or a
/// no-op when the widget failed to load. Callers never check availability
/// per call.
pub trait MapGateway {
    fn init(&self, center: MapPoint, zoom: u8);
    fn set_center(&self, center: MapPoint);
    fn show_marker(&self, id: &Id, pos: MapPoint, title: &str);
    fn move_marker(&self, id: &Id, pos: MapPoint);
    fn hide_marker(&self, id: &Id);
    /// Toggles the "active" indication of a marker (animation, info window).
    fn set_marker_active(&self, id: &Id, active: bool);
}
