//! Core traits and types shared by the simplex solvers.
//!
//! This crate defines the abstractions that solvers and observers build on:
//!
//! - [`Objective`] — an n-dimensional function to minimize
//! - [`ScalarObjective`] — a one-dimensional function to minimize
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`vector`] — elementwise arithmetic on fixed-length points

mod objective;
mod observer;
pub mod vector;

pub use objective::{Objective, ScalarObjective};
pub use observer::Observer;
pub use vector::DimensionMismatch;
