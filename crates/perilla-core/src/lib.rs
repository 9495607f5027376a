//! Perilla Core - parameter modelling for audio plugins
//!
//! This crate provides the value model a plugin host talks to: scalar
//! parameters with scaled/normalized conversion, skew curves, one-pole
//! smoothing, and the processor traits a host shell drives. Real-time
//! paths allocate nothing.
//!
//! # Core Abstractions
//!
//! ## Parameters
//!
//! - [`Parameter`] - Scalar value with range, skew, smoothing, and unit
//!   metadata; converts between scaled and normalized 0..1 forms
//! - [`ParamSpec`] - `const`-buildable initialization record
//! - [`ParameterUnit`] - Semantic unit tag with AU-compatible numbering
//!
//! ## Processors
//!
//! - [`Processor`] - Object-safe block-processing lifecycle
//! - [`Parameters`] - Ordered parameter access
//! - [`ProcessorWithParams`] - Both through one vtable, for boxed dispatch
//! - [`GainStage`] - Single-parameter gain processor
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded hosts. Disable the
//! default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! perilla-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use perilla_core::{GainStage, Parameters, Processor};
//!
//! let mut stage = GainStage::new();
//! stage.param_mut(GainStage::PARAM_GAIN).unwrap().set_normalized_value(0.6);
//!
//! let mut left = [0.5f32; 64];
//! let mut right = [0.5f32; 64];
//! stage.process_block(&mut [&mut left, &mut right]);
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations or locks in smoothing and
//!   processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Permissive values**: Scaled sets never clamp; normalized
//!   conversions saturate instead of producing NaN

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod gain;
pub mod param;
pub mod processor;
pub mod unit;

// Re-export main types at crate root
pub use gain::GainStage;
pub use param::{
    DEFAULT_PRECISION, MIN_SKEW, MIN_SMOOTH_COEFF, ParamSpec, Parameter, almost_equal,
};
pub use processor::{Parameters, Processor, ProcessorWithParams};
pub use unit::ParameterUnit;
