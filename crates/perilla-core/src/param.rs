//! Scalar plugin parameters: scaled/normalized conversion, skew curves,
//! and one-pole smoothing.
//!
//! A [`Parameter`] stores its value in *scaled* form (real-world units,
//! e.g. 0.0 to 5.0 for a gain) and converts on demand to the
//! *normalized* 0..1 form hosts use for generic automation. The mapping
//! is
//!
//! ```text
//! normalized = ((scaled - min) / (max - min)) ^ (1 / skew)
//! scaled     = min + normalized ^ skew * (max - min)
//! ```
//!
//! with `skew = 1` the exact linear case. Smoothing is a one-pole
//! low-pass over the scaled value, advanced once per audio block by the
//! processing loop so abrupt changes do not click.
//!
//! Parameters are built from a [`ParamSpec`], a plain-old-data record
//! with `const` builders:
//!
//! ```
//! use perilla_core::{ParamSpec, Parameter, ParameterUnit};
//!
//! const CUTOFF: ParamSpec =
//!     ParamSpec::new("Cutoff", ParameterUnit::Hertz, "Filter cutoff", 1000.0)
//!         .with_range(20.0, 20000.0, 1000.0)
//!         .with_skew(0.3);
//!
//! let mut param = Parameter::new(CUTOFF);
//! param.set_normalized_value(0.5);
//! assert!(param.value() > 20.0 && param.value() < 20000.0);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use libm::{expf, logf, powf};

use crate::unit::ParameterUnit;

/// Default precision for [`almost_equal`] comparisons.
pub const DEFAULT_PRECISION: f32 = 1.0e-5;

/// Floor applied to the skew factor. Non-positive skews would put a
/// division by zero or a NaN into the mapping, so sets clamp here.
pub const MIN_SKEW: f32 = 1.0e-6;

/// Floor applied to the smoothing coefficient. Keeps the coefficient in
/// (0, 1] so smoothing always makes f32-visible progress.
pub const MIN_SMOOTH_COEFF: f32 = 1.0e-4;

/// Smoothed value within this distance of the target counts as settled.
const SETTLE_EPSILON: f32 = 1.0e-6;

/// Tolerant float comparison: `|a - b| < precision`.
///
/// [`DEFAULT_PRECISION`] is the conventional tolerance for round-trip
/// checks on parameter values.
pub fn almost_equal(a: f32, b: f32, precision: f32) -> bool {
    (a - b).abs() < precision
}

/// Initialization record for a [`Parameter`].
///
/// Plain data with `const` builders, so records can live in `const`
/// tables next to the processor that owns them. Builders store verbatim;
/// range and policy clamps apply when the record is handed to
/// [`Parameter::init`].
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Display name, also the persistence key.
    pub name: &'static str,
    /// Longer human-readable description.
    pub description: &'static str,
    /// Semantic unit tag.
    pub unit: ParameterUnit,
    /// Explicit display suffix. Empty means use the unit's canonical one.
    pub unit_suffix: &'static str,
    /// Initial scaled value.
    pub value: f32,
    /// Scaled range minimum.
    pub min: f32,
    /// Scaled range maximum.
    pub max: f32,
    /// Scaled default value.
    pub default: f32,
    /// Mapping exponent, 1.0 = linear.
    pub skew: f32,
    /// Smoothing coefficient in (0, 1], 1.0 = instant.
    pub smooth_coeff: f32,
    /// UI increment granularity. Never enforced on sets.
    pub step: f32,
}

impl ParamSpec {
    /// New spec with the given identity and initial value.
    ///
    /// Remaining fields start at the conventional defaults: range [0, 1],
    /// default 0, skew 1 (linear), smoothing coefficient 0.1, step 0.01,
    /// empty suffix.
    pub const fn new(
        name: &'static str,
        unit: ParameterUnit,
        description: &'static str,
        value: f32,
    ) -> Self {
        Self {
            name,
            description,
            unit,
            unit_suffix: "",
            value,
            min: 0.0,
            max: 1.0,
            default: 0.0,
            skew: 1.0,
            smooth_coeff: 0.1,
            step: 0.01,
        }
    }

    /// Sets the scaled range and default.
    pub const fn with_range(mut self, min: f32, max: f32, default: f32) -> Self {
        self.min = min;
        self.max = max;
        self.default = default;
        self
    }

    /// Sets the mapping exponent.
    pub const fn with_skew(mut self, skew: f32) -> Self {
        self.skew = skew;
        self
    }

    /// Sets the smoothing coefficient.
    pub const fn with_smooth_coeff(mut self, smooth_coeff: f32) -> Self {
        self.smooth_coeff = smooth_coeff;
        self
    }

    /// Sets the UI step granularity.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Sets an explicit display suffix.
    pub const fn with_suffix(mut self, unit_suffix: &'static str) -> Self {
        self.unit_suffix = unit_suffix;
        self
    }
}

/// A scalar parameter with range, skew, smoothing, and unit metadata.
///
/// Holds the current scaled value plus a low-pass-filtered copy for
/// click-free application on the audio thread. Scaled sets are
/// permissive (no range clamping; the host keeps UI ranges sane), while
/// the normalized conversions saturate out-of-range values to the [0, 1]
/// ends rather than produce NaN.
///
/// `Default` yields a generic placeholder; call [`init`](Self::init) (or
/// construct with [`new`](Self::new)) exactly once before real use.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: &'static str,
    description: &'static str,
    unit: ParameterUnit,
    unit_suffix: &'static str,
    value: f32,
    smoothed: f32,
    min: f32,
    max: f32,
    default: f32,
    skew: f32,
    smooth_coeff: f32,
    step: f32,
}

impl Default for Parameter {
    fn default() -> Self {
        Self::new(ParamSpec::new("", ParameterUnit::Generic, "", 0.0))
    }
}

impl Parameter {
    /// New parameter initialized from `spec`.
    pub fn new(spec: ParamSpec) -> Self {
        let mut param = Self {
            name: spec.name,
            description: spec.description,
            unit: spec.unit,
            unit_suffix: spec.unit_suffix,
            value: spec.value,
            smoothed: spec.value,
            min: spec.min,
            max: spec.max,
            default: spec.default,
            skew: 1.0,
            smooth_coeff: 0.1,
            step: spec.step,
        };
        param.set_skew_factor(spec.skew);
        param.set_smooth_coeff(spec.smooth_coeff);
        param
    }

    /// Overwrites every field from `spec` and snaps smoothing to the new
    /// value. Call once before use for any parameter with real semantics.
    pub fn init(&mut self, spec: ParamSpec) {
        *self = Self::new(spec);
    }

    /// Current scaled value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the scaled value. Permissive: out-of-range values are stored
    /// as-is and saturate only when converted to normalized form.
    pub fn set_value(&mut self, scaled: f32) {
        self.value = scaled;
    }

    /// Current value in normalized 0..1 form.
    pub fn normalized_value(&self) -> f32 {
        self.normalize(self.value)
    }

    /// Sets the value from normalized 0..1 form. Equivalent to
    /// `set_value(denormalize(normalized))`.
    pub fn set_normalized_value(&mut self, normalized: f32) {
        self.set_value(self.denormalize(normalized));
    }

    /// Low-pass-filtered copy of the value, advanced by [`smooth`](Self::smooth).
    pub fn smoothed_value(&self) -> f32 {
        self.smoothed
    }

    /// Smoothed value in normalized 0..1 form.
    pub fn smoothed_normalized_value(&self) -> f32 {
        self.normalize(self.smoothed)
    }

    /// One smoothing step: moves the smoothed value toward the current
    /// value by the smoothing coefficient.
    ///
    /// Invoke once per audio block (or control tick) from the processing
    /// loop. O(1), allocation-free, lock-free.
    #[inline]
    pub fn smooth(&mut self) {
        self.smoothed += (self.value - self.smoothed) * self.smooth_coeff;
    }

    /// True when the smoothed value has effectively reached the value.
    pub fn is_settled(&self) -> bool {
        (self.value - self.smoothed).abs() < SETTLE_EPSILON
    }

    /// Jumps the smoothed value to the current value, skipping the glide.
    /// Used after state restore so old state does not audibly sweep in.
    pub fn snap_to_value(&mut self) {
        self.smoothed = self.value;
    }

    /// Smoothing coefficient in (0, 1].
    pub fn smooth_coeff(&self) -> f32 {
        self.smooth_coeff
    }

    /// Sets the smoothing coefficient, clamped into
    /// [[`MIN_SMOOTH_COEFF`], 1.0].
    pub fn set_smooth_coeff(&mut self, coeff: f32) {
        self.smooth_coeff = coeff.clamp(MIN_SMOOTH_COEFF, 1.0);
    }

    /// Derives the smoothing coefficient from a time constant.
    ///
    /// `tick_rate` is how many times per second [`smooth`](Self::smooth)
    /// runs (the block rate when called once per block). After `time_ms`
    /// the smoothed value has covered ~63% of a step. Non-positive time
    /// or rate means instant.
    pub fn set_smooth_time_ms(&mut self, time_ms: f32, tick_rate: f32) {
        if time_ms <= 0.0 || tick_rate <= 0.0 {
            self.smooth_coeff = 1.0;
            return;
        }
        let ticks = time_ms * 0.001 * tick_rate;
        self.smooth_coeff = (1.0 - expf(-1.0 / ticks)).clamp(MIN_SMOOTH_COEFF, 1.0);
    }

    /// Mapping exponent.
    pub fn skew_factor(&self) -> f32 {
        self.skew
    }

    /// Sets the mapping exponent, clamped to at least [`MIN_SKEW`].
    pub fn set_skew_factor(&mut self, skew: f32) {
        self.skew = skew.max(MIN_SKEW);
    }

    /// Back-solves the skew factor so that normalized 0.5 maps to
    /// `midpoint`. A derived setter, not independent state.
    ///
    /// `midpoint` must lie strictly inside (min, max); otherwise the call
    /// is a no-op and the prior skew is kept.
    pub fn set_skew_factor_from_midpoint(&mut self, midpoint: f32) {
        if !(midpoint > self.min && midpoint < self.max) {
            return;
        }
        let linear = (midpoint - self.min) / (self.max - self.min);
        // Solve 0.5^skew = linear so denormalize(0.5) lands on midpoint.
        self.set_skew_factor(logf(linear) / logf(0.5));
    }

    /// Maps a scaled value into normalized 0..1 form.
    ///
    /// The linear proportion is clamped to [0, 1] before exponentiation
    /// so out-of-range values saturate instead of feeding `powf` a
    /// negative base. A zero-width range maps everything to 0.
    pub fn normalize(&self, scaled: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let linear = ((scaled - self.min) / range).clamp(0.0, 1.0);
        if self.skew == 1.0 {
            // Linear stays exact: no powf drift at exponent 1.
            linear
        } else {
            // powf rounding can step a hair past 1.0 near the top.
            powf(linear, 1.0 / self.skew).clamp(0.0, 1.0)
        }
    }

    /// Maps a normalized 0..1 value back into scaled form. Input outside
    /// [0, 1] is clamped to the range ends.
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let n = normalized.clamp(0.0, 1.0);
        let curved = if self.skew == 1.0 {
            n
        } else {
            powf(n, self.skew).clamp(0.0, 1.0)
        };
        self.min + curved * (self.max - self.min)
    }

    /// Scaled range minimum.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Scaled range maximum.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Scaled default value.
    pub fn default_value(&self) -> f32 {
        self.default
    }

    /// UI increment granularity.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Sets the UI increment granularity.
    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    /// Display name, also the persistence key.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Longer human-readable description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Semantic unit tag.
    pub fn unit(&self) -> ParameterUnit {
        self.unit
    }

    /// Explicit display suffix, possibly empty.
    pub fn unit_suffix(&self) -> &'static str {
        self.unit_suffix
    }

    /// Sets the explicit display suffix.
    pub fn set_unit_suffix(&mut self, unit_suffix: &'static str) {
        self.unit_suffix = unit_suffix;
    }

    /// Scaled value formatted for display: two decimals plus the suffix
    /// (the explicit one if set, else the unit's canonical one).
    pub fn display_text(&self) -> String {
        let suffix = if self.unit_suffix.is_empty() {
            self.unit.suffix()
        } else {
            self.unit_suffix
        };
        format!("{:.2}{}", self.value, suffix)
    }
}
