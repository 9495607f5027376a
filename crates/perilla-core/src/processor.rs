//! Processor and parameter-access traits.
//!
//! [`Processor`] is the block-based audio lifecycle a host shell drives:
//! configure with [`prepare`](Processor::prepare), run
//! [`process_block`](Processor::process_block) per callback, tear down
//! with [`release`](Processor::release). [`Parameters`] exposes a
//! processor's ordered [`Parameter`] collection. The two meet in
//! [`ProcessorWithParams`], which lets both dispatch through a single
//! vtable behind `Box<dyn ProcessorWithParams + Send>`.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::param::Parameter;

/// Block-based audio processor driven by a host shell.
///
/// Only [`name`](Self::name) and [`process_block`](Self::process_block)
/// are required; the lifecycle hooks default to no-ops so trivial
/// processors stay trivial.
pub trait Processor {
    /// Display name of the processor.
    fn name(&self) -> &'static str;

    /// Called before processing starts and whenever the play
    /// configuration changes.
    fn prepare(&mut self, sample_rate: f32, block_size: usize) {
        let _ = (sample_rate, block_size);
    }

    /// Processes one block of audio in place. `channels` holds one slice
    /// per channel; all slices have the same length.
    ///
    /// Runs on the audio thread: no allocation, no locking, no blocking.
    fn process_block(&mut self, channels: &mut [&mut [f32]]);

    /// Called when processing stops and buffers may be freed.
    fn release(&mut self) {}

    /// Clears internal state (delay lines, smoothers) without touching
    /// parameter values.
    fn reset(&mut self) {}

    /// Latency introduced by the processor, in samples.
    fn latency_samples(&self) -> usize {
        0
    }

    /// Length of the tail the processor rings out after input stops.
    fn tail_seconds(&self) -> f32 {
        0.0
    }
}

/// Ordered access to a processor's parameters.
pub trait Parameters {
    /// Number of parameters.
    fn param_count(&self) -> usize;

    /// Parameter by index, `None` if out of range.
    fn param(&self, index: usize) -> Option<&Parameter>;

    /// Mutable parameter by index, `None` if out of range.
    fn param_mut(&mut self, index: usize) -> Option<&mut Parameter>;

    /// Index of the parameter with the given name, compared
    /// case-insensitively.
    fn find_param(&self, name: &str) -> Option<usize> {
        (0..self.param_count())
            .find(|&index| self.param(index).is_some_and(|p| p.name().eq_ignore_ascii_case(name)))
    }
}

/// Combined [`Processor`] + [`Parameters`] trait for boxed processors.
///
/// `Box<dyn Processor>` does not automatically implement [`Parameters`],
/// so this trait provides prefixed methods that reach the parameters
/// through the same vtable. A blanket impl covers every concrete type
/// that implements both traits.
pub trait ProcessorWithParams: Processor {
    /// Number of parameters.
    fn processor_param_count(&self) -> usize;

    /// Parameter by index.
    fn processor_param(&self, index: usize) -> Option<&Parameter>;

    /// Mutable parameter by index.
    fn processor_param_mut(&mut self, index: usize) -> Option<&mut Parameter>;

    /// Display text for a parameter's current value. `None` if the index
    /// is out of range.
    fn processor_display_text(&self, index: usize) -> Option<String>;
}

impl<T: Processor + Parameters> ProcessorWithParams for T {
    fn processor_param_count(&self) -> usize {
        self.param_count()
    }

    fn processor_param(&self, index: usize) -> Option<&Parameter> {
        self.param(index)
    }

    fn processor_param_mut(&mut self, index: usize) -> Option<&mut Parameter> {
        self.param_mut(index)
    }

    fn processor_display_text(&self, index: usize) -> Option<String> {
        self.param(index).map(|p| p.display_text())
    }
}

/// Routes [`Parameters`] back through the prefixed methods, so a boxed
/// processor can feed generic code bounded on `Parameters + ?Sized`
/// (snapshot capture, bulk edits) without unboxing.
impl Parameters for dyn ProcessorWithParams + Send {
    fn param_count(&self) -> usize {
        self.processor_param_count()
    }

    fn param(&self, index: usize) -> Option<&Parameter> {
        self.processor_param(index)
    }

    fn param_mut(&mut self, index: usize) -> Option<&mut Parameter> {
        self.processor_param_mut(index)
    }
}
