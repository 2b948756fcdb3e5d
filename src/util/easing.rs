//! Easing functions for animation interpolation.
//!
//! Maps normalized phase progress onto eased progress for the crate, door
//! and camera animators. All curves are pure and cheap enough to evaluate
//! several times per frame.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing). Used for camera pans.
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-in-out.
    /// Formula: t<0.5: 4t³, else 1 - (-2t+2)³/2
    CubicInOut,
    /// Bounce-out: four piecewise quadratic segments settling onto 1.
    BounceOut,
}

const BOUNCE_N1: f32 = 7.5625;
const BOUNCE_D1: f32 = 2.75;

impl EasingFunction {
    /// Default easing function: cubic ease-in-out.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        // NaN falls through clamp unchanged
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicInOut => cubic_in_out(t),
            EasingFunction::BounceOut => bounce_out(t),
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Cubic ease-in-out on an already clamped `t`.
#[inline]
#[must_use]
pub fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Bounce-out on an already clamped `t`.
#[inline]
#[must_use]
pub fn bounce_out(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let u = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * u * u + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let u = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * u * u + 0.9375
    } else {
        let u = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * u * u + 0.984_375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONOTONE: [EasingFunction; 4] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::CubicInOut,
    ];

    #[test]
    fn test_monotone_endpoints() {
        for easing in MONOTONE {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing:?} at 0");
            assert!(
                (easing.evaluate(1.0) - 1.0).abs() < 1e-6,
                "{easing:?} at 1"
            );
        }
    }

    #[test]
    fn test_monotone_curves_never_decrease() {
        for easing in MONOTONE {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = easing.evaluate(i as f32 / 100.0);
                assert!(v >= prev - 1e-6, "{easing:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_cubic_in_out_shape() {
        let ease = EasingFunction::CubicInOut;
        assert!((ease.evaluate(0.5) - 0.5).abs() < 1e-6);
        // 4 * 0.25³ = 0.0625
        assert!((ease.evaluate(0.25) - 0.0625).abs() < 1e-6);
        // symmetric around the midpoint
        assert!((ease.evaluate(0.75) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_out_converges_to_one() {
        let bounce = EasingFunction::BounceOut;
        assert_eq!(bounce.evaluate(0.0), 0.0);
        assert!((bounce.evaluate(1.0) - 1.0).abs() < 1e-5);
        assert!((bounce.evaluate(0.999) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_bounce_out_segment_joins() {
        // Each segment ends exactly where the next begins (the "floor").
        assert!((bounce_out(1.0 / BOUNCE_D1) - 1.0).abs() < 1e-5);
        assert!((bounce_out(2.0 / BOUNCE_D1) - 1.0).abs() < 1e-5);
        assert!((bounce_out(2.5 / BOUNCE_D1) - 1.0).abs() < 1e-5);
        // and dips between them
        assert!(bounce_out(1.5 / BOUNCE_D1) < 0.8);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let cubic = EasingFunction::CubicInOut;
        assert_eq!(cubic.evaluate(-0.5), 0.0);
        assert!((cubic.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_nan_input_completes() {
        assert_eq!(EasingFunction::Linear.evaluate(f32::NAN), 1.0);
        assert!((EasingFunction::CubicInOut.evaluate(f32::NAN) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = EasingFunction::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.5), 0.25);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicInOut);
    }

    #[test]
    fn test_serde_names() {
        let parsed: EasingFunction =
            serde_json::from_str("\"bounce_out\"").unwrap();
        assert_eq!(parsed, EasingFunction::BounceOut);
    }
}
