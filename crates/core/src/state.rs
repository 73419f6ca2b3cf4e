/// A point on the solution of a first-order equation `dy/dx = f(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State<V> {
    /// The independent variable.
    pub x: f64,

    /// The dependent value at `x`.
    pub y: V,
}

impl<V> State<V> {
    /// Creates a state at `x` with value `y`.
    pub const fn new(x: f64, y: V) -> Self {
        Self { x, y }
    }
}

/// A point on the solution of a second-order equation `d²y/dx² = f(x, y, dy)`.
///
/// The equation is tracked as the coupled pair of the value `y` and its first
/// derivative `dy`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SecondOrderState<V> {
    /// The independent variable.
    pub x: f64,

    /// The dependent value at `x`.
    pub y: V,

    /// The first derivative of `y` at `x`.
    pub dy: V,
}

impl<V> SecondOrderState<V> {
    /// Creates a state at `x` with value `y` and first derivative `dy`.
    pub const fn new(x: f64, y: V, dy: V) -> Self {
        Self { x, y, dy }
    }
}
