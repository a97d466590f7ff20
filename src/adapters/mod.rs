//! Optional adapters for external math libraries.
//!
//! Enable feature flags (e.g. `nalgebra`) to use external vector types
//! as spline control points.

#[cfg(feature = "nalgebra")]
pub mod nalgebra;
