//! Single-step integrators for ordinary differential equations.
//!
//! Three schemes share the [`Stepper`] interface:
//!
//! - [`Euler`]: explicit Euler for `dy/dx = f(x, y)`, first order
//! - [`Rk4`]: classical Runge-Kutta for `dy/dx = f(x, y)`, fourth order
//! - [`Rk4SecondOrder`]: classical Runge-Kutta for `d²y/dx² = f(x, y, dy)`,
//!   fourth order
//!
//! Each stepper is built from a derivative function and, optionally, an
//! [`Algebra`] for the value type. The caller owns the stepping loop:
//!
//! ```
//! use stepwise_steppers::{Rk4, State, Stepper};
//!
//! let stepper = Rk4::new(|x: f64, y: &f64| 3.0 * x * x * y);
//!
//! let mut state = State::new(1.0, 2.0);
//! for _ in 0..10 {
//!     state = stepper.next_step(&state, 0.01);
//! }
//!
//! let exact = 2.0 * (1.1_f64.powi(3) - 1.0).exp();
//! assert!((state.y - exact).abs() < 1e-6);
//! ```
//!
//! Derivative functions that can fail are stepped with `try_next_step`,
//! which returns the first error unchanged.

mod euler;
mod rk4;
mod rk4_second_order;


pub use euler::Euler;
pub use rk4::Rk4;
pub use rk4_second_order::Rk4SecondOrder;

pub use stepwise_core::{
    Algebra, ComponentWise, Ops, Real, SecondOrderState, State, StepSize, StepSizeError, Stepper,
};

use std::convert::Infallible;

/// Unwraps a result that cannot hold an error.
fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Combines four stage increments with the classical weights:
///
/// ```text
/// (k1 + 2*k2 + 2*k3 + k4) / 6
/// ```
fn rk4_increment<V, A: Algebra<V>>(algebra: &A, [k1, k2, k3, k4]: [&V; 4]) -> V {
    let sum = algebra.add(k1, &algebra.scale(k2, 2.0));
    let sum = algebra.add(&sum, &algebra.scale(k3, 2.0));
    let sum = algebra.add(&sum, k4);
    algebra.scale(&sum, 1.0 / 6.0)
}
