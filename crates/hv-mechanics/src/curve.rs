//! Progression curves: how a proficiency score advances per attempt.
//!
//! The curve is a seam: hosts can plug in their own pacing by implementing
//! [`ProgressionCurve`]. Whatever the implementation, the contract is
//! fixed — a successful attempt never lowers the score, gains scale with
//! the attribute factor, and higher levels see diminishing returns.

use serde::{Deserialize, Serialize};

/// Maps a proficiency score to its value after one gathering attempt.
pub trait ProgressionCurve {
    /// Advance `current` given the character's `level`, the attribute
    /// `factor`, and whether the attempt succeeded.
    ///
    /// Contract: when `success` is true the result is `>= current`; when
    /// false the result is exactly `current`.
    fn advance(&self, current: f64, level: u32, factor: f64, success: bool) -> f64;
}

/// The default curve: a flat base gain scaled by the attribute factor and
/// damped linearly with level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardCurve {
    /// Gain at level 1 with a neutral factor.
    pub base_gain: f64,
    /// Per-level damping applied to the gain.
    pub level_damping: f64,
}

/// Default gain per successful attempt before scaling.
pub const BASE_GAIN: f64 = 4.0;

/// Default per-level damping coefficient.
pub const LEVEL_DAMPING: f64 = 0.15;

impl Default for StandardCurve {
    fn default() -> Self {
        Self {
            base_gain: BASE_GAIN,
            level_damping: LEVEL_DAMPING,
        }
    }
}

impl ProgressionCurve for StandardCurve {
    fn advance(&self, current: f64, level: u32, factor: f64, success: bool) -> f64 {
        if !success {
            return current;
        }
        let damping = 1.0 + self.level_damping * f64::from(level.saturating_sub(1));
        current + (self.base_gain * factor.max(0.0)) / damping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_never_decreases() {
        let curve = StandardCurve::default();
        let next = curve.advance(10.0, 1, 1.0, true);
        assert!(next >= 10.0);
        assert_eq!(next, 14.0);
    }

    #[test]
    fn failure_leaves_value_unchanged() {
        let curve = StandardCurve::default();
        assert_eq!(curve.advance(10.0, 7, 1.5, false), 10.0);
    }

    #[test]
    fn gains_diminish_with_level() {
        let curve = StandardCurve::default();
        let at_level_1 = curve.advance(0.0, 1, 1.0, true);
        let at_level_10 = curve.advance(0.0, 10, 1.0, true);
        assert!(at_level_10 < at_level_1);
        assert!(at_level_10 > 0.0);
    }

    #[test]
    fn gain_scales_with_factor() {
        let curve = StandardCurve::default();
        let weak = curve.advance(0.0, 1, 0.5, true);
        let strong = curve.advance(0.0, 1, 1.5, true);
        assert_eq!(strong, 3.0 * weak);
    }

    proptest::proptest! {
        #[test]
        fn contract_holds_for_all_inputs(
            current in 0.0f64..1000.0,
            level in 1u32..100,
            factor in 0.0f64..2.0,
        ) {
            let curve = StandardCurve::default();
            proptest::prop_assert!(curve.advance(current, level, factor, true) >= current);
            proptest::prop_assert_eq!(curve.advance(current, level, factor, false), current);
        }
    }
}
