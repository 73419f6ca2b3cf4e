use crate::StepSize;

/// A single-step integration scheme for values of type `V`.
///
/// A stepper holds a derivative function and an [`Algebra`](crate::Algebra)
/// and nothing else: calling [`next_step`](Stepper::next_step) is a pure
/// transformation of its arguments. Driving the stepping loop, collecting a
/// trajectory, or adapting the step size is left to the caller.
///
/// `h` is used as given. A zero step returns the state unchanged, and NaN or
/// infinite values produced anywhere in the step propagate into the result.
pub trait Stepper<V> {
    /// The state advanced by this stepper.
    type State;

    /// Returns the state advanced by the step size `h`.
    #[must_use]
    fn next_step(&self, state: &Self::State, h: f64) -> Self::State;

    /// Returns the state advanced by a validated step size.
    #[must_use]
    fn step_by(&self, state: &Self::State, h: StepSize) -> Self::State {
        self.next_step(state, h.get())
    }

    /// The formal order of accuracy of the scheme.
    ///
    /// Halving `h` reduces the global error by roughly `2^order`.
    fn order(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::State;

    // A stepper that only advances the independent variable.
    struct Clock;

    impl Stepper<f64> for Clock {
        type State = State<f64>;

        fn next_step(&self, state: &State<f64>, h: f64) -> State<f64> {
            State::new(state.x + h, state.y)
        }

        fn order(&self) -> usize {
            0
        }
    }

    fn advance<S: Stepper<f64>>(
        stepper: &S,
        mut state: S::State,
        h: f64,
        steps: usize,
    ) -> S::State {
        for _ in 0..steps {
            state = stepper.next_step(&state, h);
        }
        state
    }

    #[test]
    fn generic_over_steppers() {
        let end = advance(&Clock, State::new(1.0, 5.0), 0.5, 4);

        assert_eq!(end, State::new(3.0, 5.0));
        assert_eq!(Clock.order(), 0);
    }

    #[test]
    fn step_by_validated_step_size() {
        let h = StepSize::new(0.25).unwrap();
        let start = State::new(1.0, 5.0);

        assert_eq!(Clock.step_by(&start, h), State::new(1.25, 5.0));
        assert_eq!(Clock.step_by(&start, -h), State::new(0.75, 5.0));
    }
}
