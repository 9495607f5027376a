//! Property-based tests for parameter mapping and smoothing.
//!
//! Verifies the normalized/scaled round-trip laws, skew midpoint
//! behavior, saturation bounds, and smoothing convergence using proptest
//! for randomized input generation.

use perilla_core::{ParamSpec, Parameter, ParameterUnit};
use proptest::prelude::*;

/// Gain-style parameter: linear, scaled range [0, 5].
fn gain_param() -> Parameter {
    Parameter::new(
        ParamSpec::new("Gain", ParameterUnit::Generic, "Gain Param", 1.0).with_range(0.0, 5.0, 1.0),
    )
}

/// Parameter over [min, min + width] with the given skew.
fn ranged_param(min: f32, width: f32, skew: f32) -> Parameter {
    Parameter::new(
        ParamSpec::new("P", ParameterUnit::Generic, "", min)
            .with_range(min, min + width, min)
            .with_skew(skew),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Linear round-trip law on the gain range: for any scaled value in
    /// [0, 5], denormalize(normalize(v)) lands within 1e-5.
    #[test]
    fn linear_round_trip_on_gain_range(scaled in 0.0f32..=5.0f32) {
        let param = gain_param();
        let back = param.denormalize(param.normalize(scaled));
        prop_assert!(
            (back - scaled).abs() < 1.0e-5,
            "round trip drifted: {} -> {} -> {}",
            scaled, param.normalize(scaled), back
        );
    }

    /// Linear round-trip on arbitrary ranges, with an ulp-derived
    /// tolerance: the subtract/divide/multiply/add chain loses at most a
    /// few ulp of (|min| + width).
    #[test]
    fn linear_round_trip_on_any_range(
        min in -1000.0f32..1000.0f32,
        width in 0.001f32..10000.0f32,
        t in 0.0f32..=1.0f32,
    ) {
        let param = ranged_param(min, width, 1.0);
        let scaled = min + t * width;
        let back = param.denormalize(param.normalize(scaled));
        let tol = (min.abs() + width) * 8.0 * f32::EPSILON + 1.0e-6;
        prop_assert!(
            (back - scaled).abs() < tol,
            "round trip drifted: {} -> {} (tol {})",
            scaled, back, tol
        );
    }

    /// Round-trip still holds under skew. powf amplifies relative error
    /// by the exponent, so the tolerance is looser than the linear case.
    #[test]
    fn skewed_round_trip(
        skew in 0.2f32..=5.0f32,
        scaled in 0.0f32..=5.0f32,
    ) {
        let param = ranged_param(0.0, 5.0, skew);
        let back = param.denormalize(param.normalize(scaled));
        prop_assert!(
            (back - scaled).abs() < 2.0e-4,
            "skewed round trip drifted: skew={}, {} -> {}",
            skew, scaled, back
        );
    }

    /// Normalized round-trip on a zero-based range: set from normalized,
    /// read back normalized. Zero-based keeps the mapping multiplicative,
    /// so no cancellation against the range offset occurs.
    #[test]
    fn normalized_round_trip(
        skew in 0.25f32..=4.0f32,
        n in 0.0f32..=1.0f32,
    ) {
        let mut param = ranged_param(0.0, 5.0, skew);
        param.set_normalized_value(n);
        let back = param.normalized_value();
        prop_assert!(
            (back - n).abs() < 1.0e-4,
            "normalized round trip drifted: skew={}, {} -> {}",
            skew, n, back
        );
    }

    /// Midpoint law: after set_skew_factor_from_midpoint(v), normalized
    /// 0.5 denormalizes back to v.
    #[test]
    fn midpoint_maps_to_half(
        min in -100.0f32..100.0f32,
        width in 1.0f32..1000.0f32,
        t in 0.05f32..=0.95f32,
    ) {
        let mut param = ranged_param(min, width, 1.0);
        let midpoint = min + t * width;
        param.set_skew_factor_from_midpoint(midpoint);
        let at_half = param.denormalize(0.5);
        let tol = width * 1.0e-5 + 1.0e-3;
        prop_assert!(
            (at_half - midpoint).abs() < tol,
            "midpoint law broke: midpoint={}, denormalize(0.5)={}, skew={}",
            midpoint, at_half, param.skew_factor()
        );
    }

    /// normalize() saturates every finite input into [0, 1], whatever the
    /// range and skew. Out-of-range scaled values clamp rather than turn
    /// into NaN.
    #[test]
    fn normalize_saturates_into_unit_interval(
        value in -1.0e6f32..1.0e6f32,
        min in -1000.0f32..1000.0f32,
        width in 0.001f32..1000.0f32,
        skew in 0.1f32..=10.0f32,
    ) {
        let param = ranged_param(min, width, skew);
        let n = param.normalize(value);
        prop_assert!(
            n.is_finite() && (0.0..=1.0).contains(&n),
            "normalize escaped [0, 1]: value={}, min={}, width={}, skew={}, n={}",
            value, min, width, skew, n
        );
    }

    /// denormalize() stays inside the scaled range for any input, with
    /// at most final-rounding slack.
    #[test]
    fn denormalize_stays_in_range(
        n in -2.0f32..=3.0f32,
        min in -1000.0f32..1000.0f32,
        width in 0.001f32..1000.0f32,
        skew in 0.1f32..=10.0f32,
    ) {
        let param = ranged_param(min, width, skew);
        let scaled = param.denormalize(n);
        let slack = (min.abs() + width) * 4.0 * f32::EPSILON;
        prop_assert!(
            scaled >= min - slack && scaled <= min + width + slack,
            "denormalize escaped range: n={}, got {}, range [{}, {}]",
            n, scaled, min, min + width
        );
    }

    /// Smoothing converges toward the value for any coefficient in
    /// (0, 1].
    ///
    /// f32 precision limits exact convergence: the one-pole update
    /// `smoothed += (value - smoothed) * coeff` stalls when the step
    /// rounds to zero, at roughly `ULP(value) / coeff`. We verify
    /// convergence within that floor plus a 1e-4 margin for values near
    /// zero.
    #[test]
    fn smoothing_converges(
        coeff in 0.001f32..=1.0f32,
        initial in -100.0f32..100.0f32,
        target in -100.0f32..100.0f32,
    ) {
        let mut param = Parameter::new(
            ParamSpec::new("S", ParameterUnit::Generic, "", initial)
                .with_range(-100.0, 100.0, 0.0)
                .with_smooth_coeff(coeff),
        );
        param.set_value(target);

        // 20000 steps cover > 20 time constants at the slowest coeff.
        for _ in 0..20000 {
            param.smooth();
        }

        let ulp_estimate = target.abs() * f32::EPSILON;
        let precision_floor = ulp_estimate / coeff + 1.0e-4;
        let diff = (param.smoothed_value() - target).abs();
        prop_assert!(
            diff < precision_floor,
            "smoothing did not converge: initial={}, target={}, coeff={}, got={}, diff={}, tol={}",
            initial, target, coeff, param.smoothed_value(), diff, precision_floor
        );
    }
}
