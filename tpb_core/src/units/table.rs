use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::types::{ConfigError, UnitSpec};

/// Prefix that selects a named preset when parsing a table from text.
const PRESET_PREFIX: &str = "preset:";

/// Ordered, non-empty list of candidate units.
///
/// Multipliers do not have to be sorted; selection scans every entry and
/// breaks ties by table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<UnitSpec>", into = "Vec<UnitSpec>")]
pub struct UnitTable {
    units: Vec<UnitSpec>,
}

impl UnitTable {
    /// Build a table, rejecting an empty list or a multiplier that is not
    /// a finite positive number.
    pub fn new(units: Vec<UnitSpec>) -> Result<Self, ConfigError> {
        if units.is_empty() {
            return Err(ConfigError::EmptyUnitTable);
        }
        for unit in &units {
            if !unit.multiplier.is_finite() || unit.multiplier <= 0.0 {
                return Err(ConfigError::InvalidMultiplier {
                    label: unit.label.clone(),
                    multiplier: unit.multiplier,
                });
            }
        }
        Ok(Self { units })
    }

    /// Single unit with multiplier 1, e.g. `UnitTable::single("MB")`.
    pub fn single(label: impl Into<String>) -> Self {
        Self {
            units: vec![UnitSpec::new(label, 1.0)],
        }
    }

    /// Convenience constructor from `(label, multiplier)` pairs.
    pub fn from_pairs<L: Into<String>>(
        pairs: impl IntoIterator<Item = (L, f64)>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            pairs
                .into_iter()
                .map(|(label, multiplier)| UnitSpec::new(label, multiplier))
                .collect(),
        )
    }

    /// Look up a named table.
    ///
    /// | name        | units                              |
    /// |-------------|------------------------------------|
    /// | `si-bytes`  | bytes, kB, MB, GB, TB (powers of 1000) |
    /// | `iec-bytes` | bytes, KiB, MiB, GiB, TiB (powers of 1024) |
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        let (labels, base): ([&str; 5], f64) = match name {
            "si-bytes" => (["bytes", "kB", "MB", "GB", "TB"], 1000.0),
            "iec-bytes" => (["bytes", "KiB", "MiB", "GiB", "TiB"], 1024.0),
            other => return Err(ConfigError::UnknownPreset(other.to_string())),
        };
        Self::from_pairs(
            labels
                .iter()
                .enumerate()
                .map(|(i, label)| (*label, base.powi(i as i32))),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UnitSpec> {
        self.units.iter()
    }

    /// The first unit in table order. Always present.
    pub fn first(&self) -> &UnitSpec {
        &self.units[0]
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Never true for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Default for UnitTable {
    /// A single unlabeled unit.
    fn default() -> Self {
        Self::single("")
    }
}

impl TryFrom<Vec<UnitSpec>> for UnitTable {
    type Error = ConfigError;

    fn try_from(units: Vec<UnitSpec>) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl From<UnitTable> for Vec<UnitSpec> {
    fn from(table: UnitTable) -> Self {
        table.units
    }
}

impl<'a> IntoIterator for &'a UnitTable {
    type Item = &'a UnitSpec;
    type IntoIter = std::slice::Iter<'a, UnitSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

/// Parses the textual unit syntax used on the command line:
///
/// - `MB` → one unit, multiplier 1
/// - `bytes=1,kB=1000,MB=1e6` → a table (a bare label means multiplier 1)
/// - `preset:si-bytes` → a named preset
impl FromStr for UnitTable {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(name) = s.strip_prefix(PRESET_PREFIX) {
            return Self::preset(name.trim());
        }
        if !s.contains(',') && !s.contains('=') {
            return Ok(Self::single(s));
        }

        let mut units = Vec::new();
        for entry in s.split(',') {
            let entry = entry.trim();
            let (label, multiplier) = match entry.split_once('=') {
                Some((label, raw)) => {
                    let multiplier = raw
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| ConfigError::MalformedUnit(entry.to_string()))?;
                    (label.trim(), multiplier)
                }
                None => (entry, 1.0),
            };
            if label.is_empty() {
                return Err(ConfigError::MalformedUnit(entry.to_string()));
            }
            units.push(UnitSpec::new(label, multiplier));
        }
        Self::new(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(UnitTable::new(Vec::new()), Err(ConfigError::EmptyUnitTable));
    }

    #[test]
    fn test_non_positive_multiplier_rejected() {
        let err = UnitTable::from_pairs([("bytes", 1.0), ("broken", 0.0)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidMultiplier {
                label: "broken".to_string(),
                multiplier: 0.0
            }
        );
        assert!(UnitTable::from_pairs([("nan", f64::NAN)]).is_err());
    }

    #[test]
    fn test_parse_single_label() {
        let table: UnitTable = "MB".parse().unwrap();
        assert_eq!(table, UnitTable::single("MB"));
    }

    #[test]
    fn test_parse_table() {
        let table: UnitTable = "bytes, kB=1000, MB=1e6".parse().unwrap();
        let labels: Vec<&str> = table.iter().map(|u| u.label.as_str()).collect();
        assert_eq!(labels, vec!["bytes", "kB", "MB"]);
        assert_eq!(table.first().multiplier, 1.0);
        assert_eq!(table.iter().last().unwrap().multiplier, 1_000_000.0);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "kB=lots".parse::<UnitTable>(),
            Err(ConfigError::MalformedUnit("kB=lots".to_string()))
        );
        assert_eq!(
            "bytes,,kB=1000".parse::<UnitTable>(),
            Err(ConfigError::MalformedUnit(String::new()))
        );
        assert_eq!(
            "preset:furlongs".parse::<UnitTable>(),
            Err(ConfigError::UnknownPreset("furlongs".to_string()))
        );
    }

    #[test]
    fn test_presets() {
        let si: UnitTable = "preset:si-bytes".parse().unwrap();
        assert_eq!(si.len(), 5);
        assert_eq!(si.iter().nth(2).unwrap().multiplier, 1e6);

        let iec = UnitTable::preset("iec-bytes").unwrap();
        assert_eq!(iec.iter().nth(1).unwrap().label, "KiB");
        assert_eq!(iec.iter().nth(2).unwrap().multiplier, 1024.0 * 1024.0);
    }
}
