use pmap_entities::geo::MapPoint;

/// Maximum distance in degrees by which a coordinate may extend the span
/// away from the opposite running bound. Coordinates further out are
/// treated as outliers and do not widen the span.
const SPAN_EXT_MAX_DEG: f64 = 0.025;

/// Midpoint of a threshold-bounded min/max walk over the given points.
///
/// Starting from the first point, each subsequent point widens the running
/// latitude/longitude span only while it stays within `SPAN_EXT_MAX_DEG` of
/// the opposite bound. The result is the midpoint of the final spans.
///
/// This is deliberately not a true bounding-box centroid: it is
/// order-dependent, which keeps a single distant outlier from dragging the
/// center far away from the cluster. The behavior is preserved as-is for
/// compatibility with the page this component was built for.
pub fn compute_center(points: &[MapPoint], fallback: MapPoint) -> MapPoint {
    let Some(first) = points.first() else {
        return fallback;
    };
    let mut lat_min = first.lat().to_deg();
    let mut lat_max = lat_min;
    let mut lng_min = first.lng().to_deg();
    let mut lng_max = lng_min;
    for point in &points[1..] {
        let lat = point.lat().to_deg();
        if lat > lat_max && lat - lat_min <= SPAN_EXT_MAX_DEG {
            lat_max = lat;
        } else if lat < lat_min && lat_max - lat <= SPAN_EXT_MAX_DEG {
            lat_min = lat;
        }
        let lng = point.lng().to_deg();
        if lng > lng_max && lng - lng_min <= SPAN_EXT_MAX_DEG {
            lng_max = lng;
        } else if lng < lng_min && lng_max - lng <= SPAN_EXT_MAX_DEG {
            lng_min = lng;
        }
    }
    MapPoint::from_lat_lng_deg((lat_min + lat_max) / 2.0, (lng_min + lng_max) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: (f64, f64) = (49.2827, -123.1207);

    fn fallback() -> MapPoint {
        MapPoint::from_lat_lng_deg(FALLBACK.0, FALLBACK.1)
    }

    #[test]
    fn no_points_yields_fallback() {
        assert_eq!(compute_center(&[], fallback()), fallback());
    }

    #[test]
    fn single_point_yields_that_point() {
        let pt = MapPoint::from_lat_lng_deg(49.274_307, -123.123_136);
        assert_eq!(compute_center(&[pt], fallback()), pt);
    }

    #[test]
    fn two_nearby_points_yield_midpoint() {
        let a = MapPoint::from_lat_lng_deg(49.27, -123.11);
        let b = MapPoint::from_lat_lng_deg(49.28, -123.12);
        let center = compute_center(&[a, b], fallback());
        assert_eq!(
            center,
            MapPoint::from_lat_lng_deg((49.27 + 49.28) / 2.0, (-123.11 + -123.12) / 2.0)
        );
    }

    #[test]
    fn distant_outlier_does_not_widen_the_span() {
        let a = MapPoint::from_lat_lng_deg(49.27, -123.11);
        let b = MapPoint::from_lat_lng_deg(49.28, -123.12);
        let outlier = MapPoint::from_lat_lng_deg(49.50, -123.50);
        assert_eq!(
            compute_center(&[a, b, outlier], fallback()),
            compute_center(&[a, b], fallback())
        );
    }

    #[test]
    fn walk_is_order_dependent() {
        // Starting at the outlier anchors the span there.
        let a = MapPoint::from_lat_lng_deg(49.27, -123.11);
        let outlier = MapPoint::from_lat_lng_deg(49.50, -123.50);
        let from_cluster = compute_center(&[a, outlier], fallback());
        let from_outlier = compute_center(&[outlier, a], fallback());
        assert_eq!(from_cluster, a);
        assert_eq!(from_outlier, outlier);
    }

    #[test]
    fn seed_coordinates_exclude_the_southern_outlier() {
        // The five seed places of the demo page. "Landmark Hot Pot House"
        // lies more than 0.025 degrees south of the northern bound and the
        // Guu/Granville longitudes fall outside the running span, so none
        // of them widen it.
        let points = [
            MapPoint::from_lat_lng_deg(49.278_360, -123.098_231),
            MapPoint::from_lat_lng_deg(49.284_005, -123.125_435),
            MapPoint::from_lat_lng_deg(49.274_307, -123.123_136),
            MapPoint::from_lat_lng_deg(49.249_836, -123.115_540),
            MapPoint::from_lat_lng_deg(49.270_616, -123.135_774),
        ];
        let expected = MapPoint::from_lat_lng_deg(
            (49.270_616 + 49.284_005) / 2.0,
            (-123.123_136 + -123.098_231) / 2.0,
        );
        assert_eq!(compute_center(&points, fallback()), expected);
    }
}
