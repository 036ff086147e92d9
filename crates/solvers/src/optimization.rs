//! Solvers for minimization problems.
//!
//! Objectives are plain functions: [`Objective`] for n-dimensional points and
//! [`ScalarObjective`] for a single variable. Each solver counts every
//! objective call it makes and reports the total in its solution.
//!
//! # Solvers
//!
//! - [`nelder_mead`] — derivative-free simplex search in any dimension
//! - [`golden_section`] — derivative-free search over a bracketed interval for
//!   unimodal functions
//! - [`scalar`] — backend-agnostic one-dimensional minimization
//!
//! [`Objective`]: simplex_core::Objective
//! [`ScalarObjective`]: simplex_core::ScalarObjective

mod evaluate;
mod point;

pub use evaluate::Counted;
pub use point::Point;

#[cfg(feature = "golden-section")]
pub mod golden_section;
pub mod nelder_mead;
pub mod scalar;
