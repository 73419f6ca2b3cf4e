//! Classical fourth-order Runge-Kutta stepper for first-order equations.
//!
//! Advances `dy/dx = f(x, y)` by one step of size `h`:
//!
//! ```text
//! k1 = h * f(x, y)
//! k2 = h * f(x + h/2, y + k1/2)
//! k3 = h * f(x + h/2, y + k2/2)
//! k4 = h * f(x + h, y + k3)
//!
//! y_{n+1} = y_n + (k1 + 2*k2 + 2*k3 + k4) / 6
//! x_{n+1} = x_n + h
//! ```
//!
//! The four stages are evaluated in order, each depending on the previous one.

use stepwise_core::{Algebra, Real, State, Stepper};

use crate::{into_ok, rk4_increment};

/// Fourth-order Runge-Kutta stepper for `dy/dx = f(x, y)`.
///
/// Evaluates the derivative function four times per step.
#[derive(Debug, Clone, Copy)]
pub struct Rk4<F, A = Real> {
    derivative: F,
    algebra: A,
}

impl<F> Rk4<F> {
    /// Creates an RK4 stepper using real-number arithmetic.
    pub const fn new(derivative: F) -> Self {
        Self::with_algebra(derivative, Real)
    }
}

impl<F, A> Rk4<F, A> {
    /// Creates an RK4 stepper with a caller-supplied algebra.
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
    /// Stages after a failing evaluation are not evaluated.
    ///
    /// # Errors
    ///
    /// Returns the first error from the derivative function unchanged.
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
        let ops = &self.algebra;
        let (x, y) = (state.x, &state.y);
        let h_half = h * 0.5;

        let k1 = ops.scale(&f(x, y)?, h);
        let k2 = ops.scale(&f(x + h_half, &ops.add(y, &ops.scale(&k1, 0.5)))?, h);
        let k3 = ops.scale(&f(x + h_half, &ops.add(y, &ops.scale(&k2, 0.5)))?, h);
        let k4 = ops.scale(&f(x + h, &ops.add(y, &k3))?, h);

        Ok(State {
            x: x + h,
            y: ops.add(y, &rk4_increment(ops, [&k1, &k2, &k3, &k4])),
        })
    }
}

impl<V, F, A> Stepper<V> for Rk4<F, A>
where
    F: Fn(f64, &V) -> V,
    A: Algebra<V>,
{
    type State = State<V>;

    fn next_step(&self, state: &State<V>, h: f64) -> State<V> {
        into_ok(self.advance(state, h, |x, y| Ok((self.derivative)(x, y))))
    }

    fn order(&self) -> usize {
        4
    }
}
