//! The shell that stands between a processor and a plugin format.

use perilla_core::{Parameter, ProcessorWithParams};
use perilla_state::{Snapshot, StateError, blob};

use crate::listener::{HostListener, ListenerHandle};

const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
const DEFAULT_BLOCK_SIZE: usize = 512;

/// Owns a processor and exposes the surface a plugin-format adapter
/// calls: play configuration, indexed parameter dispatch, change
/// notification, and whole-processor state as snapshot blobs.
///
/// Out-of-range parameter indices never panic. Getters fall back to
/// neutral defaults (normalized `0.0`, range `[0.0, 1.0]`, default
/// `1.0`, empty name and text) and setters do nothing, so a confused
/// outer host degrades gracefully.
///
/// The host performs no locking. Callers serialize access; listener
/// notification runs synchronously on the thread that triggered it.
pub struct ProcessorHost {
    processor: Box<dyn ProcessorWithParams + Send>,
    sample_rate: f32,
    block_size: usize,
    num_inputs: usize,
    num_outputs: usize,
    suspended: bool,
    non_realtime: bool,
    latency_samples: usize,
    listeners: Vec<(ListenerHandle, Box<dyn HostListener + Send>)>,
    next_handle: u64,
    /// Tracks open begin/end gesture brackets per parameter.
    #[cfg(debug_assertions)]
    gesturing: Vec<bool>,
}

impl ProcessorHost {
    /// Wraps `processor` with the default play configuration: 44.1 kHz,
    /// 512-sample blocks, stereo in and out.
    pub fn new(processor: Box<dyn ProcessorWithParams + Send>) -> Self {
        #[cfg(debug_assertions)]
        let gesturing = vec![false; processor.processor_param_count()];
        Self {
            processor,
            sample_rate: DEFAULT_SAMPLE_RATE,
            block_size: DEFAULT_BLOCK_SIZE,
            num_inputs: 2,
            num_outputs: 2,
            suspended: false,
            non_realtime: false,
            latency_samples: 0,
            listeners: Vec::new(),
            next_handle: 0,
            #[cfg(debug_assertions)]
            gesturing,
        }
    }

    /// The wrapped processor.
    pub fn processor(&self) -> &(dyn ProcessorWithParams + Send) {
        self.processor.as_ref()
    }

    /// The wrapped processor, mutably.
    pub fn processor_mut(&mut self) -> &mut (dyn ProcessorWithParams + Send) {
        self.processor.as_mut()
    }

    /// Stores a new play configuration without preparing the processor.
    /// Call [`prepare`](Self::prepare) to push it down.
    pub fn set_play_config(
        &mut self,
        num_inputs: usize,
        num_outputs: usize,
        sample_rate: f32,
        block_size: usize,
    ) {
        tracing::debug!(
            "play config: {num_inputs} in, {num_outputs} out, {sample_rate} Hz, {block_size} samples"
        );
        self.num_inputs = num_inputs;
        self.num_outputs = num_outputs;
        self.sample_rate = sample_rate;
        self.block_size = block_size;
    }

    /// Prepares the processor with the stored play configuration.
    pub fn prepare(&mut self) {
        tracing::debug!(
            "prepare: {} Hz, {} samples",
            self.sample_rate,
            self.block_size
        );
        self.processor.prepare(self.sample_rate, self.block_size);
    }

    /// Lets the processor drop its processing buffers.
    pub fn release(&mut self) {
        tracing::debug!("release");
        self.processor.release();
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Maximum samples per block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of input channels.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Number of output channels.
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Suspends or resumes processing. A suspended host emits silence
    /// from [`process`](Self::process).
    pub fn suspend(&mut self, suspended: bool) {
        if self.suspended != suspended {
            tracing::debug!("suspended={suspended}");
        }
        self.suspended = suspended;
    }

    /// Whether [`process`](Self::process) is currently muted.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Marks offline (faster than realtime) rendering.
    pub fn set_non_realtime(&mut self, non_realtime: bool) {
        self.non_realtime = non_realtime;
    }

    /// Whether the host is rendering offline.
    pub fn is_non_realtime(&self) -> bool {
        self.non_realtime
    }

    /// Latency reported to the outer host, in samples.
    pub fn latency_samples(&self) -> usize {
        self.latency_samples
    }

    /// Records a new latency figure. A change broadcasts
    /// [`processor_changed`](HostListener::processor_changed) so outer
    /// hosts re-read their compensation.
    pub fn set_latency_samples(&mut self, samples: usize) {
        if self.latency_samples != samples {
            self.latency_samples = samples;
            self.notify_processor_changed();
        }
    }

    /// Number of parameters on the wrapped processor.
    pub fn parameter_count(&self) -> usize {
        self.processor.processor_param_count()
    }

    /// Normalized value of parameter `index`, `0.0` when out of range.
    pub fn parameter(&self, index: usize) -> f32 {
        self.processor
            .processor_param(index)
            .map_or(0.0, Parameter::normalized_value)
    }

    /// Sets parameter `index` from a normalized value.
    pub fn set_parameter(&mut self, index: usize, normalized: f32) {
        if let Some(param) = self.processor.processor_param_mut(index) {
            param.set_normalized_value(normalized);
        }
    }

    /// Scaled value of parameter `index`, `0.0` when out of range.
    pub fn scaled_parameter(&self, index: usize) -> f32 {
        self.processor
            .processor_param(index)
            .map_or(0.0, Parameter::value)
    }

    /// Sets parameter `index` from a scaled value, unclamped.
    pub fn set_scaled_parameter(&mut self, index: usize, scaled: f32) {
        if let Some(param) = self.processor.processor_param_mut(index) {
            param.set_value(scaled);
        }
    }

    /// Lower end of the scaled range, `0.0` when out of range.
    pub fn parameter_min(&self, index: usize) -> f32 {
        self.processor
            .processor_param(index)
            .map_or(0.0, Parameter::min)
    }

    /// Upper end of the scaled range, `1.0` when out of range.
    pub fn parameter_max(&self, index: usize) -> f32 {
        self.processor
            .processor_param(index)
            .map_or(1.0, Parameter::max)
    }

    /// Default scaled value, `1.0` when out of range.
    pub fn parameter_default(&self, index: usize) -> f32 {
        self.processor
            .processor_param(index)
            .map_or(1.0, Parameter::default_value)
    }

    /// Parameter name, empty when out of range.
    pub fn parameter_name(&self, index: usize) -> &'static str {
        self.processor
            .processor_param(index)
            .map_or("", Parameter::name)
    }

    /// Display text for the current value, empty when out of range.
    pub fn parameter_text(&self, index: usize) -> String {
        self.processor
            .processor_display_text(index)
            .unwrap_or_default()
    }

    /// Sets a parameter from a normalized value and tells listeners.
    pub fn set_parameter_notifying(&mut self, index: usize, normalized: f32) {
        let Some(param) = self.processor.processor_param_mut(index) else {
            return;
        };
        param.set_normalized_value(normalized);
        self.for_each_listener(|listener| listener.parameter_changed(index, normalized));
    }

    /// Sets a parameter from a scaled value and tells listeners.
    /// Listeners hear the normalized equivalent.
    pub fn set_scaled_parameter_notifying(&mut self, index: usize, scaled: f32) {
        let Some(param) = self.processor.processor_param_mut(index) else {
            return;
        };
        param.set_value(scaled);
        let normalized = param.normalized_value();
        self.for_each_listener(|listener| listener.parameter_changed(index, normalized));
    }

    /// Tells listeners the user grabbed the control for `index`.
    ///
    /// Every call must be paired with one
    /// [`end_gesture`](Self::end_gesture); debug builds assert the
    /// pairing.
    pub fn begin_gesture(&mut self, index: usize) {
        if index >= self.parameter_count() {
            return;
        }
        #[cfg(debug_assertions)]
        {
            debug_assert!(
                !self.gesturing[index],
                "begin_gesture for a parameter already mid-gesture"
            );
            self.gesturing[index] = true;
        }
        self.for_each_listener(|listener| listener.gesture_began(index));
    }

    /// Tells listeners the user let go of the control for `index`.
    pub fn end_gesture(&mut self, index: usize) {
        if index >= self.parameter_count() {
            return;
        }
        #[cfg(debug_assertions)]
        {
            debug_assert!(
                self.gesturing[index],
                "end_gesture without a matching begin_gesture"
            );
            self.gesturing[index] = false;
        }
        self.for_each_listener(|listener| listener.gesture_ended(index));
    }

    /// Tells listeners that something beyond a single parameter changed
    /// and cached views should be rebuilt.
    pub fn update_host_display(&mut self) {
        self.notify_processor_changed();
    }

    /// Registers a listener and returns the handle that removes it.
    pub fn subscribe(&mut self, listener: Box<dyn HostListener + Send>) -> ListenerHandle {
        let handle = ListenerHandle(self.next_handle);
        self.next_handle += 1;
        self.listeners.push((handle, listener));
        tracing::debug!(
            "listener {} subscribed ({} total)",
            handle.0,
            self.listeners.len()
        );
        handle
    }

    /// Removes a previously registered listener. Returns `false` when
    /// the handle is unknown or already removed.
    pub fn unsubscribe(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != handle);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!("listener {} unsubscribed", handle.0);
        }
        removed
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Runs one block through the processor.
    ///
    /// While suspended every channel is cleared instead. After a live
    /// block, channels past `num_inputs` are cleared so output-only
    /// buses never carry stale garbage.
    pub fn process(&mut self, channels: &mut [&mut [f32]]) {
        if self.suspended {
            for channel in channels.iter_mut() {
                channel.fill(0.0);
            }
            return;
        }
        self.processor.process_block(channels);
        for channel in channels.iter_mut().skip(self.num_inputs) {
            channel.fill(0.0);
        }
    }

    /// Captures every parameter into a framed snapshot blob.
    pub fn save_state(&self) -> Result<Vec<u8>, StateError> {
        let snapshot = Snapshot::capture(self.processor.name(), self.processor.as_ref());
        let bytes = blob::encode(&snapshot)?;
        tracing::debug!(
            "saved state '{}': {} params, {} bytes",
            snapshot.name,
            snapshot.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Restores parameters from a snapshot blob.
    ///
    /// Unreadable input is logged and ignored; a rejected blob must
    /// never take the processor down. Matched parameters snap their
    /// smoothing to the restored value.
    pub fn load_state(&mut self, data: &[u8]) {
        let Some(snapshot) = blob::decode(data) else {
            tracing::warn!("rejected state blob ({} bytes)", data.len());
            return;
        };
        let applied = snapshot.apply(self.processor.as_mut());
        tracing::debug!(
            "restored state '{}': {applied} of {} entries matched",
            snapshot.name,
            snapshot.len()
        );
    }

    fn notify_processor_changed(&mut self) {
        self.for_each_listener(|listener| listener.processor_changed());
    }

    fn for_each_listener(&mut self, mut notify: impl FnMut(&mut dyn HostListener)) {
        for (_, listener) in &mut self.listeners {
            notify(listener.as_mut());
        }
    }
}
