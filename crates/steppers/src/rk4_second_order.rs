//! Classical fourth-order Runge-Kutta stepper for second-order equations.
//!
//! Advances `d²y/dx² = f(x, y, dy)` by reducing it to simultaneous first-order
//! updates of the value `y` and its derivative `dy`. Two families of stage
//! increments are built in lockstep: `k` for the value and `m` for the
//! derivative.
//!
//! ```text
//! k1 = h*dy,           m1 = h*f(x, y, dy)
//! k2 = h*(dy + m1/2),  m2 = h*f(x + h/2, y + k1/2, dy + m1/2)
//! k3 = h*(dy + m2/2),  m3 = h*f(x + h/2, y + k2/2, dy + m2/2)
//! k4 = h*(dy + m3),    m4 = h*f(x + h, y + k3, dy + m3)
//!
//! y_{n+1}  = y_n  + (k1 + 2*k2 + 2*k3 + k4) / 6
//! dy_{n+1} = dy_n + (m1 + 2*m2 + 2*m3 + m4) / 6
//! x_{n+1}  = x_n  + h
//! ```
//!
//! Only the `m` terms evaluate `f`. Each `k` term reuses the derivative estimate
//! of its stage, which is also the `dy` argument of that stage's evaluation.

use stepwise_core::{Algebra, Real, SecondOrderState, Stepper};

use crate::{into_ok, rk4_increment};

/// Fourth-order Runge-Kutta stepper for `d²y/dx² = f(x, y, dy)`.
///
/// Evaluates the derivative function four times per step.
///
/// # Example
///
/// ```
/// use stepwise_steppers::{Rk4SecondOrder, SecondOrderState, Stepper};
///
/// // Simple harmonic oscillator: y'' = -y.
/// let oscillator = Rk4SecondOrder::new(|_x: f64, y: &f64, _dy: &f64| -y);
///
/// let mut state = SecondOrderState::new(0.0, 1.0, 0.0);
/// for _ in 0..100 {
///     state = oscillator.next_step(&state, 0.01);
/// }
///
/// assert!((state.y - 1.0_f64.cos()).abs() < 1e-9);
/// assert!((state.dy + 1.0_f64.sin()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rk4SecondOrder<F, A = Real> {
    derivative: F,
    algebra: A,
}

impl<F> Rk4SecondOrder<F> {
    /// Creates a second-order RK4 stepper using real-number arithmetic.
    pub const fn new(derivative: F) -> Self {
        Self::with_algebra(derivative, Real)
    }
}

impl<F, A> Rk4SecondOrder<F, A> {
    /// Creates a second-order RK4 stepper with a caller-supplied algebra.
    pub const fn with_algebra(derivative: F, algebra: A) -> Self {
        Self {
            derivative,
            algebra,
        }
    }

    /// Returns the second-derivative function.
    pub fn derivative(&self) -> &F {
        &self.derivative
    }

    /// Returns the algebra.
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    /// Advances the state by `h` using a fallible second-derivative function.
    ///
    /// Stages after a failing evaluation are not evaluated.
    ///
    /// # Errors
    ///
    /// Returns the first error from the derivative function unchanged.
    pub fn try_next_step<V, E>(
        &self,
        state: &SecondOrderState<V>,
        h: f64,
    ) -> Result<SecondOrderState<V>, E>
    where
        F: Fn(f64, &V, &V) -> Result<V, E>,
        A: Algebra<V>,
    {
        self.advance(state, h, &self.derivative)
    }

    fn advance<V, E>(
        &self,
        state: &SecondOrderState<V>,
        h: f64,
        f: impl Fn(f64, &V, &V) -> Result<V, E>,
    ) -> Result<SecondOrderState<V>, E>
    where
        A: Algebra<V>,
    {
        let ops = &self.algebra;
        let (x, y, dy) = (state.x, &state.y, &state.dy);
        let h_half = h * 0.5;

        let k1 = ops.scale(dy, h);
        let m1 = ops.scale(&f(x, y, dy)?, h);

        let dy2 = ops.add(dy, &ops.scale(&m1, 0.5));
        let k2 = ops.scale(&dy2, h);
        let m2 = ops.scale(&f(x + h_half, &ops.add(y, &ops.scale(&k1, 0.5)), &dy2)?, h);

        let dy3 = ops.add(dy, &ops.scale(&m2, 0.5));
        let k3 = ops.scale(&dy3, h);
        let m3 = ops.scale(&f(x + h_half, &ops.add(y, &ops.scale(&k2, 0.5)), &dy3)?, h);

        let dy4 = ops.add(dy, &m3);
        let k4 = ops.scale(&dy4, h);
        let m4 = ops.scale(&f(x + h, &ops.add(y, &k3), &dy4)?, h);

        Ok(SecondOrderState {
            x: x + h,
            y: ops.add(y, &rk4_increment(ops, [&k1, &k2, &k3, &k4])),
            dy: ops.add(dy, &rk4_increment(ops, [&m1, &m2, &m3, &m4])),
        })
    }
}

impl<V, F, A> Stepper<V> for Rk4SecondOrder<F, A>
where
    F: Fn(f64, &V, &V) -> V,
    A: Algebra<V>,
{
    type State = SecondOrderState<V>;

    fn next_step(&self, state: &SecondOrderState<V>, h: f64) -> SecondOrderState<V> {
        into_ok(self.advance(state, h, |x, y, dy| Ok((self.derivative)(x, y, dy))))
    }

    fn order(&self) -> usize {
        4
    }
}
