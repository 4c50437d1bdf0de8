//! Stability ROI score.
//!
//! Prosperity (gas flow and funding against their targets) divided by a
//! risk factor that grows as naval distance drops below its target.

use crate::error::{ResonanceError, Result};

/// Naval distance at or above which risk is neutral (nm).
pub const TARGET_NAVAL_DISTANCE_NM: f64 = 125.0;

/// Target gas flow (MMcf/day).
pub const TARGET_GAS_FLOW: f64 = 175.0;

/// Target humanitarian funding (USD millions).
pub const TARGET_FUNDING_MUSD: f64 = 606.0;

/// Compute the stability ROI, rounded to two decimals.
pub fn stability_roi(naval_distance_nm: f64, gas_flow: f64, funding_musd: f64) -> Result<f64> {
    for (name, value) in [
        ("naval distance", naval_distance_nm),
        ("gas flow", gas_flow),
        ("funding", funding_musd),
    ] {
        if !value.is_finite() {
            return Err(ResonanceError::InvalidInput(format!(
                "{name} must be a finite number, got {value}"
            )));
        }
    }

    let risk = if naval_distance_nm >= TARGET_NAVAL_DISTANCE_NM {
        1.0
    } else {
        TARGET_NAVAL_DISTANCE_NM / naval_distance_nm.max(1.0)
    };
    let prosperity = gas_flow / TARGET_GAS_FLOW + funding_musd / TARGET_FUNDING_MUSD;

    Ok(round2(prosperity / risk))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_target() {
        assert_eq!(stability_roi(125.0, 175.0, 606.0).unwrap(), 2.0);
    }

    #[test]
    fn test_distance_above_target_has_no_risk() {
        assert_eq!(stability_roi(400.0, 175.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_close_distance_raises_risk() {
        // risk = 125 / 25 = 5
        assert_eq!(stability_roi(25.0, 175.0, 606.0).unwrap(), 0.4);
        // distance clamps to 1nm: risk = 125
        assert_eq!(stability_roi(0.0, 175.0, 606.0).unwrap(), 0.02);
    }

    #[test]
    fn test_rounding() {
        // prosperity = 0.5 + 0.0 = 0.5, risk = 125/60
        assert_eq!(stability_roi(60.0, 87.5, 0.0).unwrap(), 0.24);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(stability_roi(f64::NAN, 1.0, 1.0).is_err());
        assert!(stability_roi(1.0, f64::INFINITY, 1.0).is_err());
    }
}
