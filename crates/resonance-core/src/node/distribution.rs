//! Region -> node count distribution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::Region;
use crate::error::{ResonanceError, Result};

/// How many nodes to create per region.
///
/// Counts are signed so that a negative count can be represented (e.g. in a
/// hand-edited config file) and rejected by validation instead of wrapping.
/// Iteration always follows region enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, i64>", into = "BTreeMap<String, i64>")]
pub struct NodeDistribution(BTreeMap<Region, i64>);

impl NodeDistribution {
    /// Empty distribution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The 144-node layout: 48 europe, 36 americas, 36 asia, 12 africa, 12 oceania.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with(Region::Europe, 48)
            .with(Region::Americas, 36)
            .with(Region::Asia, 36)
            .with(Region::Africa, 12)
            .with(Region::Oceania, 12)
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, region: Region, count: i64) -> Self {
        self.set(region, count);
        self
    }

    /// Set the count for a region, replacing any previous value.
    pub fn set(&mut self, region: Region, count: i64) {
        self.0.insert(region, count);
    }

    /// Count for a region (0 when absent).
    #[must_use]
    pub fn count(&self, region: Region) -> i64 {
        self.0.get(&region).copied().unwrap_or(0)
    }

    /// Iterate `(region, count)` in region enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, i64)> + '_ {
        self.0.iter().map(|(r, c)| (*r, *c))
    }

    /// Returns true if no region has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a distribution from `(label, count)` pairs.
    ///
    /// Fails on unknown labels and on a region listed twice.
    pub fn from_labels<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut dist = Self::new();
        for (label, count) in pairs {
            let region: Region = label.as_ref().parse()?;
            if dist.0.insert(region, count).is_some() {
                return Err(ResonanceError::Configuration(format!(
                    "region '{region}' listed more than once"
                )));
            }
        }
        Ok(dist)
    }

    /// Check that every count is non-negative.
    pub fn validate(&self) -> Result<()> {
        match self.iter().find(|(_, count)| *count < 0) {
            Some((region, count)) => Err(ResonanceError::Configuration(format!(
                "node count for region '{region}' must be non-negative, got {count}"
            ))),
            None => Ok(()),
        }
    }

    /// Total node count, once validated.
    pub fn total(&self) -> Result<u64> {
        self.validate()?;
        Ok(self
            .iter()
            .fold(0u64, |acc, (_, c)| acc.saturating_add(c.unsigned_abs())))
    }
}

impl TryFrom<BTreeMap<String, i64>> for NodeDistribution {
    type Error = ResonanceError;

    fn try_from(map: BTreeMap<String, i64>) -> Result<Self> {
        Self::from_labels(map)
    }
}

impl From<NodeDistribution> for BTreeMap<String, i64> {
    fn from(dist: NodeDistribution) -> Self {
        dist.iter()
            .map(|(region, count)| (region.label().to_string(), count))
            .collect()
    }
}

/// Parses `europe=3,asia=2`.
impl FromStr for NodeDistribution {
    type Err = ResonanceError;

    fn from_str(s: &str) -> Result<Self> {
        let pairs = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (label, count) = part.split_once('=').ok_or_else(|| {
                    ResonanceError::Configuration(format!(
                        "expected 'region=count', got '{part}'"
                    ))
                })?;
                let count: i64 = count.trim().parse().map_err(|e| {
                    ResonanceError::Configuration(format!("bad count in '{part}': {e}"))
                })?;
                Ok((label.trim().to_string(), count))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_labels(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_has_144_nodes() {
        assert_eq!(NodeDistribution::standard().total().unwrap(), 144);
    }

    #[test]
    fn test_iteration_follows_region_order() {
        // Insertion order must not matter.
        let dist = NodeDistribution::new()
            .with(Region::Oceania, 1)
            .with(Region::Asia, 2)
            .with(Region::Europe, 3);
        let regions: Vec<Region> = dist.iter().map(|(r, _)| r).collect();
        assert_eq!(regions, vec![Region::Europe, Region::Asia, Region::Oceania]);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let dist = NodeDistribution::new().with(Region::Europe, -1);
        let err = dist.validate().unwrap_err();
        assert!(matches!(err, ResonanceError::Configuration(_)));
        assert!(err.to_string().contains("europe"));
        assert!(dist.total().is_err());
    }

    #[test]
    fn test_from_labels() {
        let dist = NodeDistribution::from_labels([("europe", 3), ("asia", 2)]).unwrap();
        assert_eq!(dist.count(Region::Europe), 3);
        assert_eq!(dist.count(Region::Asia), 2);
        assert_eq!(dist.count(Region::Africa), 0);
    }

    #[test]
    fn test_from_labels_rejects_unknown_and_duplicate() {
        assert!(NodeDistribution::from_labels([("mars", 1)]).is_err());
        assert!(NodeDistribution::from_labels([("asia", 1), ("ASIA", 2)]).is_err());
    }

    #[test]
    fn test_parse() {
        let dist: NodeDistribution = "europe=3, asia=2".parse().unwrap();
        assert_eq!(dist.total().unwrap(), 5);

        let dist: NodeDistribution = "europe=-1".parse().unwrap();
        assert!(dist.validate().is_err());

        assert!("europe".parse::<NodeDistribution>().is_err());
        assert!("europe=many".parse::<NodeDistribution>().is_err());
        assert!("".parse::<NodeDistribution>().unwrap().is_empty());
    }

    #[test]
    fn test_toml_table() {
        #[derive(Deserialize)]
        struct Wrapper {
            distribution: NodeDistribution,
        }
        let w: Wrapper = toml::from_str("[distribution]\neurope = 2\nafrica = 1\n").unwrap();
        assert_eq!(w.distribution.count(Region::Europe), 2);
        assert_eq!(w.distribution.count(Region::Africa), 1);
    }
}
