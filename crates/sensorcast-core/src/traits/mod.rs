//! Boundary traits to external collaborators.
//!
//! - [`SampleSource`]: time-ordered range queries over a sample store

mod source;

pub use source::{InMemorySampleSource, SampleSource};
