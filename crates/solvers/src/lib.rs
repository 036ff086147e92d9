//! Derivative-free numerical minimizers.
//!
//! - [`optimization::nelder_mead`] — adaptive Nelder-Mead simplex search over
//!   n-dimensional points
//! - [`optimization::golden_section`] — bracketed search for one-dimensional
//!   unimodal functions (feature `golden-section`, enabled by default)
//! - [`optimization::scalar`] — one-dimensional entry point backed by
//!   `argmin`'s Brent method (feature `brent`) or golden section search, and
//!   reporting [`ScalarError::Unsupported`] when neither is compiled in
//!
//! [`ScalarError::Unsupported`]: optimization::scalar::ScalarError::Unsupported

pub mod optimization;
