//! Tolerant snapshot persistence for perilla parameters.
//!
//! This crate captures a processor's scaled parameter values into a
//! named, name-keyed [`Snapshot`], serializes it as TOML, and frames it
//! into the opaque byte blobs plugin hosts store. The restore direction
//! is deliberately forgiving: unknown keys are ignored, missing keys
//! leave parameters untouched, and malformed blobs decode to `None`
//! instead of failing, so stale or partial state can never take a
//! session down.
//!
//! # Example
//!
//! ```rust
//! use perilla_core::GainStage;
//! use perilla_state::{Snapshot, blob};
//!
//! let mut stage = GainStage::new();
//! stage.set_gain(3.25);
//!
//! // Capture, frame, and restore into a fresh processor.
//! let snapshot = Snapshot::capture("Gain Stage", &stage);
//! let bytes = blob::encode(&snapshot).unwrap();
//!
//! let mut restored = GainStage::new();
//! blob::decode(&bytes).unwrap().apply(&mut restored);
//! assert!((restored.gain() - 3.25).abs() < 1e-5);
//! ```

pub mod blob;

mod error;
mod snapshot;

pub use error::StateError;
pub use snapshot::Snapshot;
