//! Simulation configuration.
//!
//! Every value that used to be a process-wide constant lives here and is
//! passed into constructors, so independent simulations can coexist.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::acoustic::DEFAULT_SAMPLE_RATE;
use crate::error::{ensure_frequency, ResonanceError, Result};
use crate::node::NodeDistribution;
use crate::physics::{DEFAULT_REFERENCE_FREQUENCY, DEFAULT_SPEED_OF_SOUND};

/// Configuration for one resonance network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceConfig {
    /// Reference frequency every node synchronizes against (Hz).
    #[serde(default = "default_reference_frequency")]
    pub reference_frequency: f64,

    /// Master clock frequency (Hz), reported in status only.
    #[serde(default = "default_master_clock_frequency")]
    pub master_clock_frequency: f64,

    /// Length of one sync cycle (seconds); default acoustic output duration.
    #[serde(default = "default_sync_cycle_secs")]
    pub sync_cycle_secs: f64,

    /// Sample rate for acoustic output descriptors (Hz).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Speed of sound used for wavelength (m/s).
    #[serde(default = "default_speed_of_sound")]
    pub speed_of_sound: f64,

    /// Symbolic location of the resonance bridge.
    #[serde(default = "default_bridge_location")]
    pub bridge_location: String,

    /// Nodes to create per region.
    #[serde(default = "NodeDistribution::standard")]
    pub distribution: NodeDistribution,
}

impl Default for ResonanceConfig {
    fn default() -> Self {
        Self {
            reference_frequency: default_reference_frequency(),
            master_clock_frequency: default_master_clock_frequency(),
            sync_cycle_secs: default_sync_cycle_secs(),
            sample_rate: default_sample_rate(),
            speed_of_sound: default_speed_of_sound(),
            bridge_location: default_bridge_location(),
            distribution: NodeDistribution::standard(),
        }
    }
}

impl ResonanceConfig {
    /// Load config from a TOML file, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = Self::from_toml(&content)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ResonanceError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ResonanceError::ConfigParse(e.to_string()))
    }

    /// Check every value is usable.
    pub fn validate(&self) -> Result<()> {
        ensure_frequency(self.reference_frequency)?;
        ensure_frequency(self.master_clock_frequency)?;
        if !(self.sync_cycle_secs.is_finite() && self.sync_cycle_secs > 0.0) {
            return Err(ResonanceError::Configuration(format!(
                "sync_cycle_secs must be positive, got {}",
                self.sync_cycle_secs
            )));
        }
        if self.sample_rate == 0 {
            return Err(ResonanceError::Configuration(
                "sample_rate must be positive".to_string(),
            ));
        }
        if !(self.speed_of_sound.is_finite() && self.speed_of_sound > 0.0) {
            return Err(ResonanceError::Configuration(format!(
                "speed_of_sound must be positive, got {}",
                self.speed_of_sound
            )));
        }
        self.distribution.validate()
    }
}

// Default value functions for serde.
const fn default_reference_frequency() -> f64 {
    DEFAULT_REFERENCE_FREQUENCY
}

const fn default_master_clock_frequency() -> f64 {
    0.043
}

const fn default_sync_cycle_secs() -> f64 {
    23.25
}

const fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

const fn default_speed_of_sound() -> f64 {
    DEFAULT_SPEED_OF_SOUND
}

fn default_bridge_location() -> String {
    String::from("Portici 71, Bolzano/Bozen")
}
