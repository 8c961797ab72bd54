//! First-class total orders.
//!
//! An [`Order`] packages a three-way comparison as a value. Everything else —
//! predicates, `min`/`max`, clamping, duals, lexicographic combination — is
//! derived purely from the wrapped `compare` primitive, so any lawful
//! comparison function yields the full combinator set.
//!
//! The ordering value itself is [`std::cmp::Ordering`]; its associative
//! combination rule (first non-equal operand wins) is exposed through the
//! [`Semigroup`] instance in [`crate::typeclass`], and [`Order`] has a
//! `Semigroup` instance of its own producing lexicographic orders.
//!
//! # Laws
//!
//! A lawful `Order` must satisfy, for all `a`, `b`, `c`:
//!
//! - Reflexivity: `compare(a, a) == Equal`
//! - Antisymmetry: if `compare(a, b) != Greater` and `compare(b, a) != Greater`
//!   then `equals(a, b)`
//! - Transitivity: if `compare(a, b) != Greater` and `compare(b, c) != Greater`
//!   then `compare(a, c) != Greater`
//!
//! # Examples
//!
//! ```rust
//! use kleisli::order::Order;
//! use std::cmp::Ordering;
//!
//! let numeric: Order<i32> = Order::natural();
//! assert_eq!(numeric.compare(&1, &2), Ordering::Less);
//! assert_eq!(numeric.min(1, 2), 1);
//! assert!(numeric.between(&5, &1, &10));
//! ```

use std::cmp::Ordering;
use std::rc::Rc;

use crate::typeclass::Semigroup;

use super::eq::Equiv;

/// A first-class total order on `A`.
///
/// Construction goes through [`Order::from_compare`] (or [`Order::natural`]
/// for types that already implement [`std::cmp::Ord`]); equality is always
/// derived from the comparison, so `compare(a, b) == Equal` and
/// `equals(a, b)` agree by construction.
pub struct Order<A>
where
    A: 'static,
{
    compare_fn: Rc<dyn Fn(&A, &A) -> Ordering>,
}

impl<A> Order<A>
where
    A: 'static,
{
    /// Creates an `Order` from a three-way comparison function.
    ///
    /// Reference-equal arguments short-circuit to `Equal` before the supplied
    /// function runs. Semantics are unchanged: a value always compares equal
    /// to itself under a lawful comparison.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::order::Order;
    /// use std::cmp::Ordering;
    ///
    /// let by_length: Order<String> =
    ///     Order::from_compare(|x: &String, y: &String| x.len().cmp(&y.len()));
    /// assert_eq!(
    ///     by_length.compare(&"ab".to_string(), &"abc".to_string()),
    ///     Ordering::Less
    /// );
    /// ```
    pub fn from_compare<F>(compare: F) -> Self
    where
        F: Fn(&A, &A) -> Ordering + 'static,
    {
        Self {
            compare_fn: Rc::new(move |x: &A, y: &A| {
                if std::ptr::eq(x, y) {
                    Ordering::Equal
                } else {
                    compare(x, y)
                }
            }),
        }
    }

    /// Creates an `Order` from the type's `Ord` implementation.
    #[must_use]
    pub fn natural() -> Self
    where
        A: Ord,
    {
        Self::from_compare(A::cmp)
    }

    /// Compares two values.
    pub fn compare(&self, x: &A, y: &A) -> Ordering {
        (self.compare_fn)(x, y)
    }

    /// Tests whether two values compare equal.
    ///
    /// Derived from `compare`, so it is consistent with it by construction.
    pub fn equals(&self, x: &A, y: &A) -> bool {
        self.compare(x, y) == Ordering::Equal
    }

    /// Downgrades this order to its underlying equivalence.
    #[must_use]
    pub fn equiv(&self) -> Equiv<A> {
        let compare_fn = self.compare_fn.clone();
        Equiv::new(move |x: &A, y: &A| compare_fn(x, y) == Ordering::Equal)
    }

    /// Tests whether `x` is strictly less than `y`.
    pub fn less_than(&self, x: &A, y: &A) -> bool {
        self.compare(x, y) == Ordering::Less
    }

    /// Tests whether `x` is strictly greater than `y`.
    pub fn greater_than(&self, x: &A, y: &A) -> bool {
        self.compare(x, y) == Ordering::Greater
    }

    /// Tests whether `x` is less than or equal to `y`.
    pub fn less_than_or_equal(&self, x: &A, y: &A) -> bool {
        self.compare(x, y) != Ordering::Greater
    }

    /// Tests whether `x` is greater than or equal to `y`.
    pub fn greater_than_or_equal(&self, x: &A, y: &A) -> bool {
        self.compare(x, y) != Ordering::Less
    }

    /// Takes the minimum of two values.
    ///
    /// If the values compare equal, the first argument is chosen.
    pub fn min(&self, x: A, y: A) -> A {
        if self.compare(&x, &y) == Ordering::Greater {
            y
        } else {
            x
        }
    }

    /// Takes the maximum of two values.
    ///
    /// If the values compare equal, the first argument is chosen.
    pub fn max(&self, x: A, y: A) -> A {
        if self.compare(&x, &y) == Ordering::Less {
            y
        } else {
            x
        }
    }

    /// Clamps a value between a minimum and a maximum.
    ///
    /// The caller must supply `low <= high` under this order; behavior with an
    /// inverted range is unspecified and not validated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::order::Order;
    ///
    /// let numeric: Order<i32> = Order::natural();
    /// assert_eq!(numeric.clamp(15, 0, 10), 10);
    /// assert_eq!(numeric.clamp(-3, 0, 10), 0);
    /// assert_eq!(numeric.clamp(5, 0, 10), 5);
    /// ```
    pub fn clamp(&self, value: A, low: A, high: A) -> A {
        self.max(self.min(value, high), low)
    }

    /// Tests whether a value lies between a minimum and a maximum, inclusive.
    pub fn between(&self, value: &A, low: &A, high: &A) -> bool {
        !(self.less_than(value, low) || self.greater_than(value, high))
    }

    /// Pulls this order back through a projection.
    ///
    /// The resulting `Order<B>` compares projections. The reference-equality
    /// short-circuit applies to the `B` values, before the projection is
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::order::Order;
    /// use std::cmp::Ordering;
    ///
    /// let by_length: Order<String> = Order::<usize>::natural().contramap(|s: &String| s.len());
    /// assert_eq!(
    ///     by_length.compare(&"abc".to_string(), &"z".to_string()),
    ///     Ordering::Greater
    /// );
    /// ```
    pub fn contramap<B, F>(self, projection: F) -> Order<B>
    where
        B: 'static,
        F: Fn(&B) -> A + 'static,
    {
        Order::from_compare(move |x: &B, y: &B| self.compare(&projection(x), &projection(y)))
    }

    /// Reverses the comparison direction.
    ///
    /// Implemented by swapping the argument order into the wrapped compare,
    /// so `reversed().compare(a, b) == compare(b, a)`.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::from_compare(move |x: &A, y: &A| self.compare(y, x))
    }
}

impl<A> Clone for Order<A>
where
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            compare_fn: self.compare_fn.clone(),
        }
    }
}

/// Lexicographic combination: the first order decides unless it reports
/// `Equal`, in which case the second order is consulted.
impl<A> Semigroup for Order<A>
where
    A: 'static,
{
    fn combine(self, other: Self) -> Self {
        Self::from_compare(move |x: &A, y: &A| match self.compare(x, y) {
            Ordering::Equal => other.compare(x, y),
            decided => decided,
        })
    }
}

// Tuple orders compare component-wise left to right, returning on the first
// non-equal component. Arity mismatch is impossible: the tuple type fixes the
// number of components statically. The per-arity constructors are generated
// mechanically so the logic cannot drift between arities.
macro_rules! tuple_orders {
    ($($arity:literal => [$(($ty:ident, $idx:tt)),+]);+ $(;)?) => {
        paste::paste! {
            $(
                #[doc = concat!(
                    "Lexicographic order on ", $arity, "-tuples from one order per component.\n\n",
                    "Components are compared left to right; the first non-equal comparison decides.",
                )]
                pub fn [<tuple $arity>]<$($ty: 'static),+>(
                    $([<order_ $idx>]: Order<$ty>),+
                ) -> Order<($($ty,)+)> {
                    Order::from_compare(move |x: &($($ty,)+), y: &($($ty,)+)| {
                        Ordering::Equal
                            $(.then_with(|| [<order_ $idx>].compare(&x.$idx, &y.$idx)))+
                    })
                }
            )+
        }
    };
}

tuple_orders! {
    2 => [(A, 0), (B, 1)];
    3 => [(A, 0), (B, 1), (C, 2)];
    4 => [(A, 0), (B, 1), (C, 2), (D, 3)];
}
