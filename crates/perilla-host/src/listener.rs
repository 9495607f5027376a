//! Change notifications from a host shell to its observers.

/// Identifies one subscription on a [`ProcessorHost`](crate::ProcessorHost).
///
/// Returned by [`subscribe`](crate::ProcessorHost::subscribe) and redeemed
/// by [`unsubscribe`](crate::ProcessorHost::unsubscribe). Handles are
/// never reused within one host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub(crate) u64);

/// Observer of parameter and processor changes on a
/// [`ProcessorHost`](crate::ProcessorHost).
///
/// Every method defaults to a no-op, so implementors override only the
/// notifications they care about. Notification is synchronous on the
/// thread that triggered the change.
pub trait HostListener {
    /// A parameter was set through one of the notifying setters.
    /// `normalized` is the new value mapped into [0, 1].
    fn parameter_changed(&mut self, index: usize, normalized: f32) {
        let _ = (index, normalized);
    }

    /// The user grabbed the control for parameter `index`.
    fn gesture_began(&mut self, index: usize) {
        let _ = index;
    }

    /// The user let go of the control for parameter `index`.
    fn gesture_ended(&mut self, index: usize) {
        let _ = index;
    }

    /// Something beyond a single parameter changed (latency, a restored
    /// snapshot) and cached views should be rebuilt.
    fn processor_changed(&mut self) {}
}
