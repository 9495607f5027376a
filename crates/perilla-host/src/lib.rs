//! Perilla Host - the shell between a processor and a plugin format.
//!
//! [`ProcessorHost`] owns a boxed [`ProcessorWithParams`](perilla_core::ProcessorWithParams)
//! and exposes the surface a plugin-format adapter calls: play
//! configuration, suspend and latency handling, indexed parameter
//! dispatch with out-of-range safety, listener notification, and
//! whole-processor state as framed snapshot blobs.
//!
//! # Example
//!
//! ```
//! use perilla_core::GainStage;
//! use perilla_host::ProcessorHost;
//!
//! let mut host = ProcessorHost::new(Box::new(GainStage::new()));
//! host.set_play_config(2, 2, 48_000.0, 256);
//! host.prepare();
//!
//! // Normalized automation from the outer host.
//! host.set_parameter(0, 0.6);
//! assert!((host.scaled_parameter(0) - 3.0).abs() < 1e-4);
//!
//! let mut left = [1.0f32; 256];
//! let mut right = [1.0f32; 256];
//! host.process(&mut [&mut left[..], &mut right[..]]);
//!
//! let state = host.save_state().unwrap();
//! host.load_state(&state);
//! ```
//!
//! Change notification goes through [`HostListener`]; see
//! [`ProcessorHost::subscribe`].

mod host;
mod listener;

pub use host::ProcessorHost;
pub use listener::{HostListener, ListenerHandle};
pub use perilla_state::StateError;
