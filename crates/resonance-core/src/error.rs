use thiserror::Error;

/// Result type alias for resonance operations
pub type Result<T> = std::result::Result<T, ResonanceError>;

/// Errors that can occur while building or synchronizing a resonance network
///
/// All of these are raised synchronously by the call that receives the bad
/// input, before any state is touched. None of them are transient.
#[derive(Error, Debug)]
pub enum ResonanceError {
    /// Invalid configuration or node distribution (negative count, unknown region, ...)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Reference frequency was zero, negative or not a finite number
    #[error("invalid reference frequency: {0} Hz (must be positive and finite)")]
    InvalidFrequency(f64),

    /// Synchronization timestamp was not finite
    #[error("invalid synchronization timestamp: {0}")]
    InvalidTimestamp(f64),

    /// Numeric input to an auxiliary formula was out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Config file could not be parsed
    #[error("failed to parse config: {0}")]
    ConfigParse(String),

    /// IO error while reading a config file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResonanceError {
    /// Returns true if the error was caused by bad caller input rather than IO
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_)
                | Self::InvalidFrequency(_)
                | Self::InvalidTimestamp(_)
                | Self::InvalidInput(_)
        )
    }
}

/// Reject anything that is not a strictly positive, finite frequency.
pub(crate) fn ensure_frequency(frequency: f64) -> Result<f64> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(frequency)
    } else {
        Err(ResonanceError::InvalidFrequency(frequency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_frequency_accepts_positive() {
        assert_eq!(ensure_frequency(432.073).unwrap(), 432.073);
        assert_eq!(ensure_frequency(f64::MIN_POSITIVE).unwrap(), f64::MIN_POSITIVE);
    }

    #[test]
    fn test_ensure_frequency_rejects_non_positive() {
        for f in [0.0, -0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(ensure_frequency(f), Err(ResonanceError::InvalidFrequency(_))),
                "{f} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_display() {
        let e = ResonanceError::InvalidFrequency(-5.0);
        assert!(e.to_string().contains("-5"));

        let e = ResonanceError::Configuration("negative count".into());
        assert_eq!(e.to_string(), "configuration error: negative count");
    }

    #[test]
    fn test_is_input_error() {
        assert!(ResonanceError::InvalidFrequency(0.0).is_input_error());
        assert!(ResonanceError::Configuration(String::new()).is_input_error());
        let io = ResonanceError::Io(std::io::Error::other("boom"));
        assert!(!io.is_input_error());
    }
}
