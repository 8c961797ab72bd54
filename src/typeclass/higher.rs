//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over type constructors such as `Option<_>` or
//! `Result<_, E>` directly. This module emulates that ability with a GAT:
//! `TypeConstructor::WithType<B>` re-applies the constructor at a new inner
//! type. Every capability trait in this crate (`Functor`, `Applicative`,
//! `Monad`) builds on it.
//!
//! A constructor that carries extra type parameters beyond the value slot —
//! `Result<_, E>` carries one, a hypothetical `Tagged<_, C, E>` carries two —
//! simply fixes those parameters in its impl. The extra parameters ride along
//! untouched through `WithType`, which is what lets the transformers in
//! [`crate::transform`] stay generic over constructors of any arity.

/// A trait representing a type constructor applied to some inner type.
///
/// # Associated Types
///
/// - `Inner`: the type parameter this constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B` instead.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` must be `F` itself.
/// Extra type parameters (such as the error slot of `Result<_, E>`) must be
/// preserved unchanged by `WithType`.
///
/// # Example
///
/// ```rust
/// use kleisli::typeclass::TypeConstructor;
///
/// fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let none_string: Option<String> = rewrap(Some(42));
/// assert_eq!(none_string, None);
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result usable as
    /// a constructor in its own right, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn result_with_type_preserves_error_slot() {
        fn assert_result_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
        assert_result_with_type::<String, (), i32>();
    }

    #[test]
    fn with_type_transformations_chain() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_option_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_option_bool::<Step2>();
    }

    // A constructor with two extra parameters still satisfies the contract:
    // the tag slots are fixed by the impl and pass through WithType.
    #[test]
    fn two_extra_parameters_pass_through() {
        struct Tagged<A, C, E>(A, std::marker::PhantomData<(C, E)>);

        impl<A, C, E> TypeConstructor for Tagged<A, C, E> {
            type Inner = A;
            type WithType<B> = Tagged<B, C, E>;
        }

        fn assert_tagged<T>()
        where
            T: TypeConstructor<Inner = i32, WithType<bool> = Tagged<bool, u8, String>>,
        {
        }

        assert_tagged::<Tagged<i32, u8, String>>();
    }
}
