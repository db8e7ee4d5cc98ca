use std::fmt;

/// Geographic latitude in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const fn min() -> Self {
        Self(-90.0)
    }

    pub const fn max() -> Self {
        Self(90.0)
    }

    pub fn from_deg(deg: f64) -> Self {
        let new = Self(deg);
        debug_assert!(new.is_valid());
        new
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

/// Geographic longitude in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const fn min() -> Self {
        Self(-180.0)
    }

    pub const fn max() -> Self {
        Self(180.0)
    }

    pub fn from_deg(deg: f64) -> Self {
        let new = Self(deg);
        debug_assert!(new.is_valid());
        new
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

/// A point on the map, i.e. a pair of geographic coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub fn from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Self {
        Self::new(LatCoord::from_deg(lat_deg), LngCoord::from_deg(lng_deg))
    }

    /// For coordinates from untrusted sources, e.g. API responses.
    pub fn try_from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Option<Self> {
        let point = Self::new(LatCoord(lat_deg), LngCoord(lng_deg));
        point.is_valid().then_some(point)
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "({}, {})", self.lat.to_deg(), self.lng.to_deg())
    }
}
