//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry the current best objective
//! - [`HasIteration`] — events that carry an iteration count
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use simplex_core::Observer;
//! use simplex_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use simplex_solvers::optimization::{Point, golden_section, nelder_mead};

/// An event that carries the current best objective.
pub trait HasObjective {
    /// Returns the best objective value reported by this event.
    fn objective(&self) -> f64;
}

/// An event that carries an iteration count.
pub trait HasIteration {
    /// Returns the number of iterations completed when the event was emitted.
    fn iteration(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasObjective for nelder_mead::Event<'_> {
    fn objective(&self) -> f64 {
        self.best_objective
    }
}

impl HasIteration for nelder_mead::Event<'_> {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasObjective for golden_section::Event {
    fn objective(&self) -> f64 {
        self.best.objective
    }
}

impl HasIteration for golden_section::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasObjective for Point {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
