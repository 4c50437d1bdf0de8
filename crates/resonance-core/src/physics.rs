//! Reference constant and the quantities derived from it.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_frequency, ResonanceError, Result};

/// Default reference frequency (Hz).
pub const DEFAULT_REFERENCE_FREQUENCY: f64 = 432.073;

/// Speed of sound in air at 20 °C (m/s).
pub const DEFAULT_SPEED_OF_SOUND: f64 = 343.0;

/// Named frequency constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConstant {
    /// Display symbol
    pub symbol: String,
    /// Value in Hz
    pub value_hz: f64,
    /// Unit label
    pub unit: String,
}

impl Default for ReferenceConstant {
    fn default() -> Self {
        Self {
            symbol: String::from("λ_amor"),
            value_hz: DEFAULT_REFERENCE_FREQUENCY,
            unit: String::from("Hz"),
        }
    }
}

impl ReferenceConstant {
    /// Constant with the default symbol at another frequency.
    #[must_use]
    pub fn at(value_hz: f64) -> Self {
        Self {
            value_hz,
            ..Self::default()
        }
    }

    /// Wavelength in metres for the given speed of sound.
    pub fn wavelength(&self, speed_of_sound: f64) -> Result<f64> {
        wavelength(self.value_hz, speed_of_sound)
    }

    /// Period in seconds.
    pub fn period(&self) -> Result<f64> {
        period(self.value_hz)
    }
}

/// Wavelength (m) of a wave at `frequency_hz` travelling at `speed_of_sound` (m/s).
pub fn wavelength(frequency_hz: f64, speed_of_sound: f64) -> Result<f64> {
    let f = ensure_frequency(frequency_hz)?;
    if !(speed_of_sound.is_finite() && speed_of_sound > 0.0) {
        return Err(ResonanceError::InvalidInput(format!(
            "speed of sound must be positive, got {speed_of_sound}"
        )));
    }
    Ok(speed_of_sound / f)
}

/// Period (s) of a wave at `frequency_hz`.
pub fn period(frequency_hz: f64) -> Result<f64> {
    Ok(1.0 / ensure_frequency(frequency_hz)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constant() {
        let c = ReferenceConstant::default();
        assert_eq!(c.value_hz, 432.073);
        assert_eq!(c.unit, "Hz");
    }

    #[test]
    fn test_wavelength() {
        let w = wavelength(432.073, DEFAULT_SPEED_OF_SOUND).unwrap();
        assert!((w - 0.793_847).abs() < 1e-6);
        assert!((ReferenceConstant::default().wavelength(343.0).unwrap() - w).abs() < f64::EPSILON);
    }

    #[test]
    fn test_period() {
        let p = period(432.073).unwrap();
        assert!((p - 0.002_314_424).abs() < 1e-9);
        assert_eq!(period(2.0).unwrap(), 0.5);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(period(0.0), Err(ResonanceError::InvalidFrequency(_))));
        assert!(matches!(wavelength(-1.0, 343.0), Err(ResonanceError::InvalidFrequency(_))));
        assert!(matches!(wavelength(432.0, 0.0), Err(ResonanceError::InvalidInput(_))));
        assert!(ReferenceConstant::at(0.0).period().is_err());
    }
}
