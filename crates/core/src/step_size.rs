use std::{fmt, ops::Neg};

use thiserror::Error;

/// A finite increment in the independent variable.
///
/// Steppers never validate a raw `f64` step size. `StepSize` is accepted by
/// [`Stepper::step_by`](crate::Stepper::step_by) for callers that read step
/// sizes from outside (user input, a config file) and want to reject NaN or
/// infinite values once, up front, instead of letting them propagate through
/// every state of a trajectory.
///
/// Zero and negative step sizes are allowed: a zero step leaves the state
/// unchanged and a negative step integrates backwards.
///
/// ```
/// use stepwise_core::StepSize;
///
/// let h = StepSize::new(0.1)?;
/// assert_eq!(h.get(), 0.1);
///
/// assert!(StepSize::new(f64::NAN).is_err());
/// # Ok::<(), stepwise_core::StepSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StepSize(f64);

/// Error returned when constructing an invalid [`StepSize`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepSizeError {
    #[error("step size must be finite, got {0}")]
    NotFinite(f64),
}

impl StepSize {
    /// Creates a step size from a finite value.
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::NotFinite`] if `h` is NaN or infinite.
    pub fn new(h: f64) -> Result<Self, StepSizeError> {
        if h.is_finite() {
            Ok(Self(h))
        } else {
            Err(StepSizeError::NotFinite(h))
        }
    }

    /// Returns the step size as a plain `f64`.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for StepSize {
    type Error = StepSizeError;

    fn try_from(h: f64) -> Result<Self, Self::Error> {
        Self::new(h)
    }
}

impl From<StepSize> for f64 {
    fn from(h: StepSize) -> Self {
        h.0
    }
}

impl Neg for StepSize {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for StepSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_finite_values() {
        for h in [0.1, 1e-12, 0.0, -0.5, 1e300] {
            assert_eq!(StepSize::new(h).map(StepSize::get), Ok(h));
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(
            StepSize::new(f64::INFINITY),
            Err(StepSizeError::NotFinite(f64::INFINITY))
        );
        assert_eq!(
            StepSize::new(f64::NEG_INFINITY),
            Err(StepSizeError::NotFinite(f64::NEG_INFINITY))
        );
        assert!(matches!(
            StepSize::new(f64::NAN),
            Err(StepSizeError::NotFinite(h)) if h.is_nan()
        ));
    }

    #[test]
    fn converts_to_and_from_f64() {
        let h = StepSize::try_from(0.25).unwrap();
        let raw: f64 = h.into();

        assert_eq!(raw, 0.25);
        assert!(StepSize::try_from(f64::NAN).is_err());
    }

    #[test]
    fn negation() {
        let h = StepSize::new(0.5).unwrap();

        assert_eq!((-h).get(), -0.5);
    }

    #[test]
    fn error_message() {
        let err = StepSize::new(f64::INFINITY).unwrap_err();
        assert_eq!(err.to_string(), "step size must be finite, got inf");
    }

    #[test]
    fn display() {
        assert_eq!(StepSize::new(0.1).unwrap().to_string(), "0.1");
    }
}
