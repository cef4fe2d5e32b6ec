use std::fmt;

use serde::Serialize;

/// Normalized station identifier.
///
/// Stations have no registry of their own; a station exists because some
/// route mentions it. Names are case-folded to uppercase on construction so
/// `"a"` and `"A"` refer to the same station.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    /// Build a station identifier from raw text.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Station {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Station {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for Station {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
