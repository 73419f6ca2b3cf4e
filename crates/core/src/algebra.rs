use std::ops::{Add, Mul};

/// Vector-space arithmetic over a value type `V`.
///
/// Steppers never touch `V` directly. Every addition and scaling of a state
/// value or stage increment goes through an `Algebra`, so the same stepping
/// code works for scalars, fixed-size arrays, vectors, or any caller-defined
/// type that forms a linear space over `f64`.
///
/// Implementations are expected to behave like a vector space:
/// `add` is commutative and associative, `scale` distributes over `add`,
/// `scale(v, 1.0) == v`, and `scale(v, 0.0)` is the additive identity.
/// None of this is checked.
pub trait Algebra<V> {
    /// Returns `a + b`.
    #[must_use]
    fn add(&self, a: &V, b: &V) -> V;

    /// Returns `v * c`.
    #[must_use]
    fn scale(&self, v: &V, c: f64) -> V;
}

/// Real-number arithmetic through the standard operators.
///
/// This is the default algebra for every stepper. It covers `f64` and any
/// other type whose `+` and `* f64` operators already form a linear space,
/// such as the vector types of most linear algebra crates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Real;

impl<V> Algebra<V> for Real
where
    V: Clone + Add<Output = V> + Mul<f64, Output = V>,
{
    fn add(&self, a: &V, b: &V) -> V {
        a.clone() + b.clone()
    }

    fn scale(&self, v: &V, c: f64) -> V {
        v.clone() * c
    }
}

/// Element-wise arithmetic over collections, delegating to an inner algebra.
///
/// Implemented for `Vec<V>` and `[V; N]`.
///
/// # Panics
///
/// Adding two `Vec`s of different lengths panics. A derivative function
/// that returns fewer components than the state would otherwise silently
/// truncate the state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentWise<A = Real>(pub A);

impl<A> ComponentWise<A> {
    /// Wraps `inner` so that it is applied to each element.
    pub const fn new(inner: A) -> Self {
        Self(inner)
    }
}

impl<V, A: Algebra<V>> Algebra<Vec<V>> for ComponentWise<A> {
    fn add(&self, a: &Vec<V>, b: &Vec<V>) -> Vec<V> {
        assert_eq!(a.len(), b.len(), "component-wise add of unequal lengths");
        a.iter().zip(b).map(|(a, b)| self.0.add(a, b)).collect()
    }

    fn scale(&self, v: &Vec<V>, c: f64) -> Vec<V> {
        v.iter().map(|v| self.0.scale(v, c)).collect()
    }
}

impl<V, A: Algebra<V>, const N: usize> Algebra<[V; N]> for ComponentWise<A> {
    fn add(&self, a: &[V; N], b: &[V; N]) -> [V; N] {
        std::array::from_fn(|i| self.0.add(&a[i], &b[i]))
    }

    fn scale(&self, v: &[V; N], c: f64) -> [V; N] {
        std::array::from_fn(|i| self.0.scale(&v[i], c))
    }
}

/// An algebra assembled from a pair of functions.
///
/// Useful for one-off value types where implementing [`Algebra`] by hand
/// would be more ceremony than the operations themselves.
///
/// ```
/// use stepwise_core::{Algebra, Ops};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Point(f64, f64);
///
/// let ops = Ops::new(
///     |a: &Point, b: &Point| Point(a.0 + b.0, a.1 + b.1),
///     |p: &Point, c: f64| Point(p.0 * c, p.1 * c),
/// );
///
/// let p = ops.add(&Point(1.0, 2.0), &ops.scale(&Point(1.0, 1.0), 2.0));
/// assert_eq!(p, Point(3.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ops<Add, Scale> {
    add: Add,
    scale: Scale,
}

impl<Add, Scale> Ops<Add, Scale> {
    /// Creates an algebra from an `add` and a `scale` function.
    pub const fn new(add: Add, scale: Scale) -> Self {
        Self { add, scale }
    }
}

impl<V, Add, Scale> Algebra<V> for Ops<Add, Scale>
where
    Add: Fn(&V, &V) -> V,
    Scale: Fn(&V, f64) -> V,
{
    fn add(&self, a: &V, b: &V) -> V {
        (self.add)(a, b)
    }

    fn scale(&self, v: &V, c: f64) -> V {
        (self.scale)(v, c)
    }
}
