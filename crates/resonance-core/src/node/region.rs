//! Regions and synthetic coordinates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ResonanceError;

/// Symbolic region a node belongs to.
///
/// Variant order is the enumeration order used when the registry lays out
/// nodes: `europe, americas, asia, africa, oceania`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Europe
    Europe,
    /// North and South America
    Americas,
    /// Asia
    Asia,
    /// Africa
    Africa,
    /// Oceania
    Oceania,
}

impl Region {
    /// Every region, in enumeration order.
    pub const ALL: [Self; 5] = [
        Self::Europe,
        Self::Americas,
        Self::Asia,
        Self::Africa,
        Self::Oceania,
    ];

    /// Lowercase label, as used in config files and on the command line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Europe => "europe",
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Africa => "africa",
            Self::Oceania => "oceania",
        }
    }

    /// Synthetic coordinates of the `index`-th node in this region.
    ///
    /// A plain arithmetic progression from a per-region anchor; these are
    /// symbolic, not real geodata.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coordinates(self, index: u64) -> Coordinates {
        let i = index as f64;
        let (latitude, longitude) = match self {
            Self::Europe => (48.0 + i * 2.0, 11.0 + i * 3.0),
            Self::Americas => (40.0 - i * 2.0, -74.0 - i * 3.0),
            Self::Asia => (35.0 + i * 2.0, 139.0 + i * 3.0),
            Self::Africa => (i * 2.0, 30.0 + i * 3.0),
            Self::Oceania => (-33.0 - i * 2.0, 151.0 + i * 3.0),
        };
        Coordinates {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = ResonanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.label() == wanted)
            .ok_or_else(|| {
                ResonanceError::Configuration(format!(
                    "unknown region '{s}' (expected one of: europe, americas, asia, africa, oceania)"
                ))
            })
    }
}

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
}

impl Coordinates {
    /// Returns the coordinates as a tuple
    #[must_use]
    pub const fn as_tuple(self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        let mut sorted = Region::ALL;
        sorted.sort();
        assert_eq!(sorted, Region::ALL);
        assert!(Region::Europe < Region::Asia);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("europe".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!(" Oceania ".parse::<Region>().unwrap(), Region::Oceania);
        assert!(matches!(
            "atlantis".parse::<Region>(),
            Err(ResonanceError::Configuration(_))
        ));
    }

    #[test]
    fn test_label_roundtrip() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn test_coordinate_progression() {
        assert_eq!(Region::Europe.coordinates(0).as_tuple(), (48.0, 11.0));
        assert_eq!(Region::Europe.coordinates(2).as_tuple(), (52.0, 17.0));
        assert_eq!(Region::Americas.coordinates(1).as_tuple(), (38.0, -77.0));
        assert_eq!(Region::Africa.coordinates(0).as_tuple(), (0.0, 30.0));
        assert_eq!(Region::Oceania.coordinates(3).as_tuple(), (-39.0, 160.0));
    }
}
