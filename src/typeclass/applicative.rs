//! Applicative type class - combining independent computations in a context.
//!
//! `Applicative` extends `Functor` with the ability to lift plain values into
//! the context (`pure`) and to combine several values in the context without
//! any of them depending on another (`map2`, `apply`).
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for contexts that support lifting values and combining
/// independent computations.
///
/// # Laws
///
/// See the [module documentation](self) for the identity, homomorphism, and
/// interchange laws.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either computation fails in the sense appropriate to the context,
    /// the result fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both applicatives and keeps only the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(41)), Some(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Ok(function), Ok(b)) => Ok(function(b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Applicative for Box<A> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Box::new(function(*self, *other))
    }

    #[inline]
    fn apply<B, Output>(self, other: Box<B>) -> Box<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Box::new((*self)(*other))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_inner(), other.into_inner()))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity::new((self.into_inner())(other.into_inner()))
    }
}
