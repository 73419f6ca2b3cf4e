//! Core traits and types for single-step ODE integration.
//!
//! This crate defines the abstractions that the steppers build on:
//!
//! - [`Algebra`]: addition and scalar multiplication over a value type, with
//!   the stock implementations [`Real`], [`ComponentWise`], and [`Ops`]
//! - [`State`], [`SecondOrderState`]: the points a stepper advances
//! - [`Stepper`]: the single-step interface shared by every scheme
//! - [`StepSize`]: an optional, validated step size for callers

mod algebra;
mod state;
mod step_size;
mod stepper;

pub use algebra::{Algebra, ComponentWise, Ops, Real};
pub use state::{SecondOrderState, State};
pub use step_size::{StepSize, StepSizeError};
pub use stepper::Stepper;
