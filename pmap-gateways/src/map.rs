use pmap_core::gateways::map::MapGateway;
use pmap_entities::{geo::MapPoint, id::Id};

/// Widget-backed map capability of the demo binary: every call is
/// forwarded to the log, standing in for the marker API of a real widget.
#[derive(Debug, Default)]
pub struct LoggingMap;

impl MapGateway for LoggingMap {
    fn init(&self, center: MapPoint, zoom: u8) {
        log::info!("map: initialized at {center}, zoom {zoom}");
    }

    fn set_center(&self, center: MapPoint) {
        log::info!("map: center moved to {center}");
    }

    fn show_marker(&self, id: &Id, pos: MapPoint, title: &str) {
        log::info!("map: marker {id} ({title:?}) shown at {pos}");
    }

    fn move_marker(&self, id: &Id, pos: MapPoint) {
        log::info!("map: marker {id} moved to {pos}");
    }

    fn hide_marker(&self, id: &Id) {
        log::info!("map: marker {id} hidden");
    }

    fn set_marker_active(&self, id: &Id, active: bool) {
        log::info!("map: marker {id} active={active}");
    }
}

/// Selected once at startup when the widget failed to load.
/// Every call is a no-op; callers never check availability themselves.
#[derive(Debug, Default)]
pub struct NoopMap;

impl MapGateway for NoopMap {
    fn init(&self, _center: MapPoint, _zoom: u8) {}

    fn set_center(&self, _center: MapPoint) {}

    fn show_marker(&self, _id: &Id, _pos: MapPoint, _title: &str) {}

    fn move_marker(&self, _id: &Id, _pos: MapPoint) {}

    fn hide_marker(&self, _id: &Id) {}

    fn set_marker_active(&self, _id: &Id, _active: bool) {}
}
