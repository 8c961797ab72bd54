//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Semigroup;
//! use std::cmp::Ordering;
//!
//! // String concatenation
//! assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
//!
//! // Ordering combination: the first non-equal operand wins, which is the
//! // rule lexicographic comparators are built from
//! assert_eq!(Ordering::Equal.combine(Ordering::Less), Ordering::Less);
//! assert_eq!(Ordering::Greater.combine(Ordering::Less), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Semigroup;
    ///
    /// let combined = String::combine_all(vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(combined, Some("ab".to_string()));
    /// assert_eq!(String::combine_all(Vec::<String>::new()), None);
    /// ```
    fn combine_all<I>(items: I) -> Option<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().reduce(Self::combine)
    }
}

/// First non-equal operand wins; `Equal` falls through to the second operand.
///
/// This is the combination rule lexicographic comparators are assembled from:
/// combining the component comparisons of a tuple left to right yields the
/// tuple's lexicographic comparison.
impl Semigroup for Ordering {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.then(other)
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<A> Semigroup for Vec<A> {
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is absorbed; two `Some` values combine their contents.
impl<A: Semigroup> Semigroup for Option<A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}
