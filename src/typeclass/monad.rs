//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, which lets the result of one
//! computation decide what computation runs next. It is the contract the
//! transformers in [`crate::transform`] require of their base computation
//! type.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Monad;
//!
//! let result = Some("42")
//!     .flat_map(|s| s.parse::<i32>().ok())
//!     .flat_map(|n| if n > 0 { Some(n * 2) } else { None });
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for contexts that support sequencing dependent computations.
///
/// # Laws
///
/// See the [module documentation](self) for the left identity, right identity,
/// and associativity laws. `apply` and `fmap` must agree with their
/// `flat_map`-derived definitions.
pub trait Monad: Applicative {
    /// Applies a function returning a new context and flattens the result.
    ///
    /// This is the bind operation (`>>=` in Haskell, `and_then` on std
    /// `Option`/`Result`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// assert_eq!(x.flat_map(|n| Some(n * 2)), Some(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` represents a failure, the failure propagates and `next` is
    /// not returned.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Monad for Box<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(A) -> Box<B>,
    {
        function(*self)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}
