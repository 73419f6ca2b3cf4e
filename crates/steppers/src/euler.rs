//! Explicit Euler stepper for first-order equations.
//!
//! Advances `dy/dx = f(x, y)` by one step of size `h`:
//!
//! ```text
//! y_{n+1} = y_n + f(x_n, y_n) * h
//! x_{n+1} = x_n + h
//! ```
//!
//! # Example
//!
//! ```
//! use stepwise_steppers::{Euler, State, Stepper};
//!
//! let euler = Euler::new(|x: f64, y: &f64| 3.0 * x * x * y);
//! let next = euler.next_step(&State::new(1.0, 2.0), 0.1);
//!
//! assert!((next.x - 1.1).abs() < 1e-12);
//! assert!((next.y - 2.6).abs() < 1e-12);
//! ```

use stepwise_core::{Algebra, Real, State, Stepper};

use crate::into_ok;

/// First-order explicit Euler stepper.
///
/// Evaluates the derivative function once per step.
#[derive(Debug, Clone, Copy)]
pub struct Euler<F, A = Real> {
    derivative: F,
    algebra: A,
}

impl<F> Euler<F> {
    /// Creates an Euler stepper using real-number arithmetic.
    pub const fn new(derivative: F) -> Self {
        Self::with_algebra(derivative, Real)
    }
}

impl<F, A> Euler<F, A> {
    /// Creates an Euler stepper with a caller-supplied algebra.
    pub const fn with_algebra(derivative: F, algebra: A) -> Self {
        Self {
            derivative,
            algebra,
        }
    }

    /// Returns the derivative function.
    pub fn derivative(&self) -> &F {
        &self.derivative
    }

    /// Returns the algebra.
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    /// Advances the state by `h` using a fallible derivative function.
    ///
    /// # Errors
    ///
    /// Returns the derivative function's error unchanged.
    pub fn try_next_step<V, E>(&self, state: &State<V>, h: f64) -> Result<State<V>, E>
    where
        F: Fn(f64, &V) -> Result<V, E>,
        A: Algebra<V>,
    {
        self.advance(state, h, &self.derivative)
    }

    fn advance<V, E>(
        &self,
        state: &State<V>,
        h: f64,
        f: impl Fn(f64, &V) -> Result<V, E>,
    ) -> Result<State<V>, E>
    where
        A: Algebra<V>,
    {
        let slope = f(state.x, &state.y)?;

        Ok(State {
            x: state.x + h,
            y: self.algebra.add(&state.y, &self.algebra.scale(&slope, h)),
        })
    }
}

impl<V, F, A> Stepper<V> for Euler<F, A>
where
    F: Fn(f64, &V) -> V,
    A: Algebra<V>,
{
    type State = State<V>;

    fn next_step(&self, state: &State<V>, h: f64) -> State<V> {
        into_ok(self.advance(state, h, |x, y| Ok((self.derivative)(x, y))))
    }

    fn order(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use stepwise_core::ComponentWise;

    #[test]
    fn cubic_growth_step() {
        let euler = Euler::new(|x: f64, y: &f64| 3.0 * x * x * y);

        let next = euler.next_step(&State::new(1.0, 2.0), 0.1);

        assert_relative_eq!(next.x, 1.1);
        assert_relative_eq!(next.y, 2.6);
    }

    #[test]
    fn constant_derivative_is_exact() {
        let euler = Euler::new(|_x: f64, _y: &f64| -4.0);

        let mut state = State::new(0.0, 10.0);
        for _ in 0..8 {
            state = euler.next_step(&state, 0.25);
        }

        assert_relative_eq!(state.x, 2.0);
        assert_relative_eq!(state.y, 10.0 - 4.0 * 2.0);
    }

    #[test]
    fn zero_step_is_identity() {
        let euler = Euler::new(|x: f64, y: &f64| x.sin() + y * y);
        let state = State::new(0.7, -1.3);

        assert_eq!(euler.next_step(&state, 0.0), state);
    }

    #[test]
    fn negative_step_integrates_backwards() {
        let euler = Euler::new(|_x: f64, y: &f64| *y);

        let next = euler.next_step(&State::new(1.0, 2.0), -0.5);

        assert_relative_eq!(next.x, 0.5);
        assert_relative_eq!(next.y, 1.0);
    }

    #[test]
    fn evaluates_derivative_once_at_current_point() {
        let calls = Cell::new(0);
        let euler = Euler::new(|x: f64, y: &f64| {
            calls.set(calls.get() + 1);
            assert_eq!((x, *y), (3.0, 4.0));
            1.0
        });

        let _ = euler.next_step(&State::new(3.0, 4.0), 0.5);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn nan_propagates() {
        let euler = Euler::new(|_x: f64, _y: &f64| f64::NAN);

        let next = euler.next_step(&State::new(0.0, 1.0), 0.1);

        assert_relative_eq!(next.x, 0.1);
        assert!(next.y.is_nan());
    }

    #[test]
    fn vector_state_with_component_wise_algebra() {
        // Uniform circular motion: (x, y)' = (-y, x).
        let euler = Euler::with_algebra(
            |_t: f64, p: &[f64; 2]| [-p[1], p[0]],
            ComponentWise::<Real>::default(),
        );

        let next = euler.next_step(&State::new(0.0, [1.0, 0.0]), 0.1);

        assert_abs_diff_eq!(next.y[0], 1.0);
        assert_abs_diff_eq!(next.y[1], 0.1);
    }

    #[test]
    fn fallible_derivative() {
        #[derive(Debug, PartialEq)]
        struct Negative(f64);

        let euler = Euler::new(|_x: f64, y: &f64| {
            if *y < 0.0 {
                Err(Negative(*y))
            } else {
                Ok(y.sqrt())
            }
        });

        let next = euler.try_next_step(&State::new(0.0, 4.0), 0.5);
        assert_eq!(next, Ok(State::new(0.5, 5.0)));

        let failed = euler.try_next_step(&State::new(0.0, -1.0), 0.5);
        assert_eq!(failed, Err(Negative(-1.0)));
    }

    #[test]
    fn accessors() {
        let euler = Euler::new(|x: f64, _y: &f64| 2.0 * x);

        assert_eq!((euler.derivative())(3.0, &0.0), 6.0);
        assert_eq!(*euler.algebra(), Real);
        assert_eq!(euler.order(), 1);
    }
}
