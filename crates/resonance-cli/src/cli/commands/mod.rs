//! Command implementations.

pub mod config;
pub mod constant;
pub mod roi;
pub mod run;
pub mod status;
pub mod sync;

use anyhow::Result;
use resonance_core::{Clock, FixedClock, ResonanceConfig, ResonanceNetwork, SystemClock};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Network whose clock is chosen at runtime (wall clock or `--at`).
pub type DynNetwork = ResonanceNetwork<Box<dyn Clock>>;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration (file + command-line overrides)
    pub config: ResonanceConfig,

    /// Where the config was (or would be) loaded from
    pub config_path: PathBuf,

    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show explanations
    pub explain: bool,
}

impl Context {
    /// Build an initialized network from the configured distribution.
    ///
    /// `at` pins the clock to a fixed Unix timestamp for reproducible runs.
    pub fn network(&self, at: Option<f64>) -> Result<DynNetwork> {
        let clock: Box<dyn Clock> = match at {
            Some(ts) => Box::new(FixedClock(ts)),
            None => Box::new(SystemClock),
        };
        let mut network = ResonanceNetwork::with_clock(self.config.clone(), clock)?;
        network.initialize_from_config()?;
        Ok(network)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn context(distribution: &str) -> Context {
        Context {
            config: ResonanceConfig {
                distribution: distribution.parse().unwrap(),
                ..ResonanceConfig::default()
            },
            config_path: PathBuf::from("/nonexistent/config.toml"),
            output_format: OutputFormat::Json,
            explain: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::context;

    #[test]
    fn test_network_is_initialized() {
        let net = context("europe=2,asia=1").network(Some(10.0)).unwrap();
        assert_eq!(net.registry().len(), 3);
        assert!(!net.bridge_active());
    }
}
