//! Phase of a node against the reference frequency.

use std::f64::consts::TAU;

/// Phase in radians, `[0, 2π)`, for timestamp `t` (seconds) at frequency `f` (Hz).
///
/// Only the fractional part of the cycle count `t * f` is scaled to radians,
/// so large timestamps never feed an unbounded value into the result. The
/// computation is stateless: the same inputs always give the same phase.
///
/// Returns `0.0` when `t * f` is not finite: past 2^53 every `f64` is a
/// whole number of cycles, so overflow lands on the same phase.
#[must_use]
pub fn phase(timestamp: f64, frequency: f64) -> f64 {
    let cycles = timestamp * frequency;
    if !cycles.is_finite() {
        return 0.0;
    }

    let whole = cycles.floor();
    let fraction = cycles - whole;
    let phase = fraction * TAU;

    // A tiny negative cycle count rounds `fraction` up to exactly 1.0.
    if phase >= TAU {
        0.0
    } else {
        phase
    }
}
