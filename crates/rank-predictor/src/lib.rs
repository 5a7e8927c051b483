//! Student rank predictor service library.
//!
//! The prediction core is a pure function over an injected read-only
//! performance roster; the surrounding modules provide the HTTP surface,
//! configuration, and telemetry for the demo service.

pub mod config;
pub mod error;
pub mod prediction;
pub mod telemetry;
