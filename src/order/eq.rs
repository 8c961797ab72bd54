//! First-class equality values.
//!
//! An [`Equiv`] is a pairwise equivalence test packaged as a value, so it can
//! be composed, passed to other combinators, and pulled back through
//! projections. It is the minimal building block the ordering capability in
//! [`crate::order::ord`] extends.
//!
//! # Laws
//!
//! An `Equiv` must be an equivalence relation:
//!
//! - Reflexivity: `equals(a, a) == true`
//! - Symmetry: `equals(a, b) == equals(b, a)`
//! - Transitivity: if `equals(a, b)` and `equals(b, c)` then `equals(a, c)`

use std::rc::Rc;

/// A first-class equivalence relation on `A`.
///
/// # Examples
///
/// ```rust
/// use kleisli::order::Equiv;
///
/// let by_length: Equiv<String> = Equiv::new(|x: &String, y: &String| x.len() == y.len());
/// assert!(by_length.equals(&"abc".to_string(), &"xyz".to_string()));
/// assert!(!by_length.equals(&"ab".to_string(), &"abc".to_string()));
/// ```
pub struct Equiv<A>
where
    A: 'static,
{
    test: Rc<dyn Fn(&A, &A) -> bool>,
}

impl<A> Equiv<A>
where
    A: 'static,
{
    /// Creates an `Equiv` from an equivalence predicate.
    ///
    /// Reference-equal arguments short-circuit to `true` before the predicate
    /// runs. This never changes semantics, since any value is equivalent to
    /// itself under a lawful predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&A, &A) -> bool + 'static,
    {
        Self {
            test: Rc::new(move |x: &A, y: &A| std::ptr::eq(x, y) || test(x, y)),
        }
    }

    /// Creates an `Equiv` from the type's `PartialEq` implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::order::Equiv;
    ///
    /// let equiv: Equiv<i32> = Equiv::std();
    /// assert!(equiv.equals(&3, &3));
    /// ```
    #[must_use]
    pub fn std() -> Self
    where
        A: PartialEq,
    {
        Self::new(|x: &A, y: &A| x == y)
    }

    /// Tests whether two values are equivalent.
    pub fn equals(&self, x: &A, y: &A) -> bool {
        (self.test)(x, y)
    }

    /// Pulls this equivalence back through a projection.
    ///
    /// The resulting `Equiv<B>` considers two values equivalent when their
    /// projections are. The reference-equality short-circuit applies to the
    /// `B` values, before the projection is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::order::Equiv;
    ///
    /// let by_first: Equiv<(i32, &str)> = Equiv::<i32>::std().contramap(|pair: &(i32, &str)| pair.0);
    /// assert!(by_first.equals(&(1, "a"), &(1, "b")));
    /// assert!(!by_first.equals(&(1, "a"), &(2, "a")));
    /// ```
    pub fn contramap<B, F>(self, projection: F) -> Equiv<B>
    where
        B: 'static,
        F: Fn(&B) -> A + 'static,
    {
        Equiv::new(move |x: &B, y: &B| self.equals(&projection(x), &projection(y)))
    }
}

impl<A> Clone for Equiv<A>
where
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            test: self.test.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn std_equiv_matches_partial_eq() {
        let equiv: Equiv<i32> = Equiv::std();
        assert!(equiv.equals(&1, &1));
        assert!(!equiv.equals(&1, &2));
    }

    #[test]
    fn reference_equal_arguments_skip_the_predicate() {
        let calls = Rc::new(Cell::new(0));
        let counted = calls.clone();
        let equiv: Equiv<i32> = Equiv::new(move |x: &i32, y: &i32| {
            counted.set(counted.get() + 1);
            x == y
        });

        let value = 7;
        assert!(equiv.equals(&value, &value));
        assert_eq!(calls.get(), 0);

        let other = 7;
        assert!(equiv.equals(&value, &other));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn contramap_compares_projections() {
        let by_length: Equiv<String> = Equiv::<usize>::std().contramap(|s: &String| s.len());
        assert!(by_length.equals(&"ab".to_string(), &"cd".to_string()));
        assert!(!by_length.equals(&"ab".to_string(), &"abc".to_string()));
    }
}
