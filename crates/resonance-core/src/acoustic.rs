//! Acoustic output descriptor.
//!
//! Describes the tone a round would emit. No samples are generated.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_frequency, ResonanceError, Result};

/// CD-quality sample rate (Hz).
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Waveform shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Single-frequency sine
    PureSineWave,
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PureSineWave => write!(f, "pure_sine_wave"),
        }
    }
}

/// Parameters of a simulated tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcousticOutput {
    /// Tone frequency (Hz)
    pub frequency: f64,
    /// Duration (s)
    pub duration: f64,
    /// Whole samples covering `duration`
    pub samples: u64,
    /// Sample rate (Hz)
    pub sample_rate: u32,
    /// Waveform
    pub waveform: Waveform,
    /// Peak amplitude
    pub amplitude: f64,
}

impl AcousticOutput {
    /// Describe a tone of `duration_secs` at `frequency`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn describe(frequency: f64, duration_secs: f64, sample_rate: u32) -> Result<Self> {
        let frequency = ensure_frequency(frequency)?;
        if !(duration_secs.is_finite() && duration_secs >= 0.0) {
            return Err(ResonanceError::InvalidInput(format!(
                "duration must be a non-negative number of seconds, got {duration_secs}"
            )));
        }
        if sample_rate == 0 {
            return Err(ResonanceError::InvalidInput(
                "sample rate must be positive".to_string(),
            ));
        }

        // Non-negative and finite, so the cast only truncates the fraction.
        let samples = (duration_secs * f64::from(sample_rate)).floor() as u64;

        Ok(Self {
            frequency,
            duration: duration_secs,
            samples,
            sample_rate,
            waveform: Waveform::PureSineWave,
            amplitude: 1.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_cycle_tone() {
        let out = AcousticOutput::describe(432.073, 23.25, DEFAULT_SAMPLE_RATE).unwrap();
        assert_eq!(out.samples, 1_025_325);
        assert_eq!(out.waveform, Waveform::PureSineWave);
        assert_eq!(out.amplitude, 1.0);
    }

    #[test]
    fn test_fractional_samples_truncate() {
        let out = AcousticOutput::describe(1.0, 0.5, 3).unwrap();
        assert_eq!(out.samples, 1);
        let out = AcousticOutput::describe(1.0, 0.0, 44_100).unwrap();
        assert_eq!(out.samples, 0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            AcousticOutput::describe(0.0, 1.0, 44_100),
            Err(ResonanceError::InvalidFrequency(_))
        ));
        assert!(matches!(
            AcousticOutput::describe(432.0, -1.0, 44_100),
            Err(ResonanceError::InvalidInput(_))
        ));
        assert!(AcousticOutput::describe(432.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_waveform_label() {
        let json = serde_json::to_string(&Waveform::PureSineWave).unwrap();
        assert_eq!(json, "\"pure_sine_wave\"");
        assert_eq!(Waveform::PureSineWave.to_string(), "pure_sine_wave");
    }
}
