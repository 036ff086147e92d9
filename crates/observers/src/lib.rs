//! Reusable observers for the simplex solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the Nelder-Mead and golden section solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasIteration`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`] — records the best objective at every iteration
//! - [`LogProgress`] — reports progress through the `log` facade
//! - [`Patience`] — stops a solver once the objective stalls
//!
//! [`Observer`]: simplex_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

mod history;
mod patience;
mod progress;
pub mod traits;

pub use history::History;
pub use patience::Patience;
pub use progress::LogProgress;
