use std::fmt;

/// Display label of a business category, e.g. "Japanese" or "Seafood".
///
/// The directory API delivers categories as (label, alias) pairs;
/// only the label is kept.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category(String);

impl Category {
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<String> for Category {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Category {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.label())
    }
}
