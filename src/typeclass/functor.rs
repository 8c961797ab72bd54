//! Functor type class - mapping over the value inside a context.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for contexts whose inner value can be transformed while the
/// surrounding structure is preserved.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor should not be consumed.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// Equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Functor for Box<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(A) -> B,
    {
        Box::new(function(*self))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Box<B>
    where
        F: FnOnce(&A) -> B,
    {
        Box::new(function(self))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity::new(function(self.into_inner()))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity::new(function(self.as_inner()))
    }
}
