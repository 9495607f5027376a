//! Single-parameter gain stage.
//!
//! The smallest useful [`Processor`]: one smoothed [`Parameter`] scaling
//! every channel. Doubles as the reference implementation of the
//! processor/parameter plumbing.

use crate::param::{ParamSpec, Parameter};
use crate::processor::{Parameters, Processor};
use crate::unit::ParameterUnit;

const GAIN_SPEC: ParamSpec = ParamSpec::new("Gain", ParameterUnit::Generic, "Gain Param", 1.0)
    .with_range(0.0, 5.0, 1.0);

/// Gain processor: multiplies every sample by a smoothed gain parameter.
///
/// The gain is applied through its smoothed value, advanced once per
/// block, so automation jumps glide instead of clicking.
pub struct GainStage {
    params: [Parameter; 1],
}

impl GainStage {
    /// Index of the gain parameter.
    pub const PARAM_GAIN: usize = 0;

    /// New gain stage at unity gain, range 0.0 to 5.0.
    pub fn new() -> Self {
        Self {
            params: [Parameter::new(GAIN_SPEC)],
        }
    }

    /// Current gain multiplier.
    pub fn gain(&self) -> f32 {
        self.params[Self::PARAM_GAIN].value()
    }

    /// Sets the gain multiplier.
    pub fn set_gain(&mut self, gain: f32) {
        self.params[Self::PARAM_GAIN].set_value(gain);
    }
}

impl Default for GainStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for GainStage {
    fn name(&self) -> &'static str {
        "Gain Stage"
    }

    fn prepare(&mut self, sample_rate: f32, block_size: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!("gain stage prepare: sample_rate={sample_rate}, block_size={block_size}");
        #[cfg(not(feature = "tracing"))]
        let _ = (sample_rate, block_size);
    }

    fn process_block(&mut self, channels: &mut [&mut [f32]]) {
        let param = &mut self.params[Self::PARAM_GAIN];
        param.smooth();
        let gain = param.smoothed_value();
        for channel in channels.iter_mut() {
            for sample in channel.iter_mut() {
                *sample *= gain;
            }
        }
    }

    fn reset(&mut self) {
        self.params[Self::PARAM_GAIN].snap_to_value();
    }
}

impl Parameters for GainStage {
    fn param_count(&self) -> usize {
        self.params.len()
    }

    fn param(&self, index: usize) -> Option<&Parameter> {
        self.params.get(index)
    }

    fn param_mut(&mut self, index: usize) -> Option<&mut Parameter> {
        self.params.get_mut(index)
    }
}
