//! Identity wrapper type - the identity functor.
//!
//! `Identity` wraps a value without adding any behavior. It serves as the base
//! case for transformer stacks ("no extra effect") and as the simplest model
//! for checking type class laws.

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Tuple-struct syntax also works
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_into_inner_roundtrip() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.as_inner(), "hello");
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[test]
    fn from_conversion() {
        let wrapped: Identity<i32> = 42.into();
        assert_eq!(wrapped, Identity(42));
    }
}
