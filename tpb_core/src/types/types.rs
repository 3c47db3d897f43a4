use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A display unit: the label shown next to a value and how many base
/// amounts one of it is worth (`kB` → 1000).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub label: String,
    pub multiplier: f64,
}

impl UnitSpec {
    pub fn new(label: impl Into<String>, multiplier: f64) -> Self {
        Self {
            label: label.into(),
            multiplier,
        }
    }
}

/// A value expressed in the unit picked for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledValue<'a> {
    /// The value divided by the unit multiplier, rounded.
    pub value: f64,
    pub unit: &'a UnitSpec,
}

impl ScaledValue<'_> {
    pub fn label(&self) -> &str {
        &self.unit.label
    }

    pub fn multiplier(&self) -> f64 {
        self.unit.multiplier
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unit table must contain at least one unit")]
    EmptyUnitTable,

    #[error("unit '{label}' has invalid multiplier {multiplier} (must be finite and > 0)")]
    InvalidMultiplier { label: String, multiplier: f64 },

    #[error("malformed unit entry: '{0}'")]
    MalformedUnit(String),

    #[error("unknown unit preset: '{0}'")]
    UnknownPreset(String),
}
