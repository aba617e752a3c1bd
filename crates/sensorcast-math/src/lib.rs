//! # Sensorcast Math
//!
//! Numerical building blocks for the Sensorcast forecasting library.
//!
//! This crate provides:
//!
//! - **Filter**: Windowed-sinc FIR low-pass design and causal filtering
//! - **AR**: Autoregressive model estimation by Burg's method
//! - **Extrapolation**: Recursive (IIR-style) continuation with a fitted AR model
//!
//! All routines operate on plain `f64` slices; series and timestamps live in
//! `sensorcast-core`.
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: Degenerate recursions are reported, never
//!   propagated as `NaN`
//! - **Fixed Buffers**: Recursions run over buffers sized once up front
//! - **Deterministic**: Same input, same output, bit for bit

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::uninlined_format_args)]

pub mod ar;
pub mod error;
pub mod extrapolation;
pub mod filter;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ar::{burg, ArModel};
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{ArExtrapolator, Extrapolator};
    pub use crate::filter::{FilterSpec, FirFilter, WindowKind, DEFAULT_TAPS};
}

pub use error::{MathError, MathResult};
