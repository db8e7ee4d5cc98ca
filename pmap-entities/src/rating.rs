use crate::url::Url;

/// Star rating of a business in the directory's scale.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct RatingValue(f64);

impl RatingValue {
    pub fn new(val: f64) -> Self {
        let new = Self(val);
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for RatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

/// A rating together with the image the directory renders it with.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub value: RatingValue,
    pub image_url: Option<Url>,
}
