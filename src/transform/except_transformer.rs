//! `ExceptT` - short-circuiting failure monad transformer.
//!
//! `ExceptT<M>` layers a two-branch `Result` inside an arbitrary base monad
//! `M` where `M: Monad<Inner = Result<A, E>>`. The success branch carries the
//! computation forward; the failure branch short-circuits every subsequent
//! `flat_map` without running its continuation.
//!
//! # Generic over the base monad
//!
//! Like [`StateT`](crate::transform::StateT) there is exactly one
//! implementation, written against the [`Monad`](crate::typeclass::Monad)
//! contract. Extra type parameters of the base constructor ride along inside
//! `M` and `M::WithType<_>`, so the same code serves bases of any arity, and
//! the derived transformer has the same arity as its base.
//!
//! # Failure is a value
//!
//! No operation here panics or throws. A failure is an `Err` branch threaded
//! structurally: `flat_map` re-wraps it into the output type without invoking
//! the continuation, `fold` collapses it with the failure handler, and `catch`
//! is the only operation that can move a computation off the failure branch.
//!
//! Note that short-circuiting applies to the *branch layer only*: `apply`
//! still sequences the argument's base effect even when the function side has
//! already failed, mirroring the composition of the base applicative with the
//! two-branch applicative.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::transform::ExceptT;
//!
//! let success: ExceptT<Option<Result<i32, String>>> = ExceptT::pure(21);
//! let doubled = success.flat_map(|n| ExceptT::pure(n * 2));
//! assert_eq!(doubled.run(), Some(Ok(42)));
//!
//! let failure: ExceptT<Option<Result<i32, String>>> = ExceptT::throw("boom".to_string());
//! let untouched = failure.flat_map(|n| ExceptT::pure(n * 2));
//! assert_eq!(untouched.run(), Some(Err("boom".to_string())));
//! ```

use crate::typeclass::{Applicative, Functor, Monad};

/// A monad transformer that adds short-circuiting failure to a base monad.
///
/// # Type Parameters
///
/// - `M`: The base monad applied to the branch, e.g.
///   `Option<Result<A, E>>`, `Identity<Result<A, E>>`,
///   `Result<Result<A, E>, F>`
///
/// # Examples
///
/// ```rust
/// use kleisli::transform::ExceptT;
///
/// fn parse(input: &str) -> ExceptT<Option<Result<i32, String>>> {
///     match input.parse::<i32>() {
///         Ok(n) => ExceptT::pure(n),
///         Err(_) => ExceptT::throw(format!("not a number: {input}")),
///     }
/// }
///
/// assert_eq!(parse("42").run(), Some(Ok(42)));
/// assert_eq!(parse("x").run(), Some(Err("not a number: x".to_string())));
/// ```
pub struct ExceptT<M> {
    inner: M,
}

impl<M> ExceptT<M> {
    /// Wraps a base computation that already carries the branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::ExceptT;
    ///
    /// let wrapped: ExceptT<Option<Result<i32, String>>> = ExceptT::new(Some(Ok(42)));
    /// assert_eq!(wrapped.run(), Some(Ok(42)));
    /// ```
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Unwraps the transformer, returning the base computation.
    pub fn run(self) -> M {
        self.inner
    }
}

impl<M> Clone for ExceptT<M>
where
    M: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A, E, M> ExceptT<M>
where
    A: 'static,
    E: 'static,
    M: Monad<Inner = Result<A, E>, WithType<Result<A, E>> = M> + 'static,
{
    /// Lifts a value into the success branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::ExceptT;
    ///
    /// let success: ExceptT<Option<Result<i32, String>>> = ExceptT::pure(42);
    /// assert_eq!(success.run(), Some(Ok(42)));
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(M::pure(Ok(value)))
    }

    /// Lifts an error into the failure branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::ExceptT;
    ///
    /// let failure: ExceptT<Option<Result<i32, String>>> = ExceptT::throw("boom".to_string());
    /// assert_eq!(failure.run(), Some(Err("boom".to_string())));
    /// ```
    pub fn throw(error: E) -> Self {
        Self::new(M::pure(Err(error)))
    }

    /// Lifts a bare base computation into the success branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::ExceptT;
    ///
    /// let lifted: ExceptT<Option<Result<i32, String>>> = ExceptT::lift(Some(42));
    /// assert_eq!(lifted.run(), Some(Ok(42)));
    ///
    /// let missing: ExceptT<Option<Result<i32, String>>> = ExceptT::lift(None::<i32>);
    /// assert_eq!(missing.run(), None);
    /// ```
    pub fn lift<N>(base: N) -> Self
    where
        N: Functor<Inner = A, WithType<Result<A, E>> = M>,
    {
        Self::new(base.fmap(Ok))
    }

    /// Transforms the success branch, leaving the failure branch untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::ExceptT;
    ///
    /// let success: ExceptT<Option<Result<i32, String>>> = ExceptT::pure(21);
    /// assert_eq!(success.fmap(|n| n * 2).run(), Some(Ok(42)));
    ///
    /// let failure: ExceptT<Option<Result<i32, String>>> = ExceptT::throw("boom".to_string());
    /// assert_eq!(failure.fmap(|n| n * 2).run(), Some(Err("boom".to_string())));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> ExceptT<M::WithType<Result<B, E>>>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        ExceptT::new(self.inner.fmap(|result| result.map(function)))
    }

    /// Applies a function in one transformer to the value in another.
    ///
    /// Both base effects sequence left to right regardless of branches; the
    /// branch layer short-circuits on the first failure. That means a failed
    /// function side still evaluates the argument's *base* effect before
    /// discarding the argument's branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::ExceptT;
    ///
    /// let function: ExceptT<Option<Result<fn(i32) -> i32, String>>> =
    ///     ExceptT::pure((|n| n + 1) as fn(i32) -> i32);
    /// let argument: ExceptT<Option<Result<i32, String>>> = ExceptT::pure(41);
    /// assert_eq!(function.apply(argument).run(), Some(Ok(42)));
    ///
    /// // A failed function side with a missing argument base: the base
    /// // effect still runs, so the whole computation is None, not Err.
    /// let failed: ExceptT<Option<Result<fn(i32) -> i32, String>>> =
    ///     ExceptT::throw("boom".to_string());
    /// let missing: ExceptT<Option<Result<i32, String>>> = ExceptT::new(None);
    /// assert_eq!(failed.apply(missing).run(), None);
    /// ```
    pub fn apply<X, B>(
        self,
        argument: ExceptT<M::WithType<Result<X, E>>>,
    ) -> ExceptT<M::WithType<Result<B, E>>>
    where
        X: 'static,
        B: 'static,
        A: FnOnce(X) -> B,
        M::WithType<Result<X, E>>:
            Functor<Inner = Result<X, E>, WithType<Result<B, E>> = M::WithType<Result<B, E>>>
                + 'static,
        M::WithType<Result<B, E>>: 'static,
    {
        ExceptT::new(
            self.inner
                .flat_map::<Result<B, E>, _>(|function_result| match function_result {
                    Ok(function) => argument
                        .inner
                        .fmap(|value_result| value_result.map(function)),
                    Err(error) => argument.inner.fmap(move |_| Err(error)),
                }),
        )
    }

    /// Chains a dependent computation on the success branch.
    ///
    /// A failure branch is re-wrapped into the output type without invoking
    /// the continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::ExceptT;
    ///
    /// let success: ExceptT<Option<Result<i32, String>>> = ExceptT::pure(5);
    /// let chained = success.flat_map(|n| {
    ///     if n > 0 {
    ///         ExceptT::pure(n * 2)
    ///     } else {
    ///         ExceptT::throw("not positive".to_string())
    ///     }
    /// });
    /// assert_eq!(chained.run(), Some(Ok(10)));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> ExceptT<M::WithType<Result<B, E>>>
    where
        B: 'static,
        F: FnOnce(A) -> ExceptT<M::WithType<Result<B, E>>>,
        M::WithType<Result<B, E>>:
            Applicative<Inner = Result<B, E>, WithType<Result<B, E>> = M::WithType<Result<B, E>>>,
    {
        ExceptT::new(self.inner.flat_map::<Result<B, E>, _>(|result| match result {
            Ok(value) => function(value).inner,
            Err(error) => <M::WithType<Result<B, E>> as Applicative>::pure(Err(error)),
        }))
    }

    /// Collapses both branches to a plain value inside the base computation.
    ///
    /// Exactly one handler runs, exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::ExceptT;
    ///
    /// let success: ExceptT<Option<Result<i32, String>>> = ExceptT::pure(42);
    /// let collapsed = success.fold(|e| format!("failed: {e}"), |n| format!("got {n}"));
    /// assert_eq!(collapsed, Some("got 42".to_string()));
    /// ```
    pub fn fold<B, FE, FS>(self, on_failure: FE, on_success: FS) -> M::WithType<B>
    where
        B: 'static,
        FE: FnOnce(E) -> B + 'static,
        FS: FnOnce(A) -> B + 'static,
    {
        self.inner.fmap(|result| match result {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        })
    }

    /// Recovers the failure branch with a handler.
    ///
    /// The success branch passes through untouched; the handler runs only on
    /// failure and may itself fail again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::transform::ExceptT;
    ///
    /// let failure: ExceptT<Option<Result<i32, String>>> = ExceptT::throw("boom".to_string());
    /// let recovered = failure.catch(|_| ExceptT::pure(0));
    /// assert_eq!(recovered.run(), Some(Ok(0)));
    ///
    /// let success: ExceptT<Option<Result<i32, String>>> = ExceptT::pure(42);
    /// let untouched = success.catch(|_| ExceptT::pure(0));
    /// assert_eq!(untouched.run(), Some(Ok(42)));
    /// ```
    pub fn catch<F>(self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        Self::new(self.inner.flat_map::<Result<A, E>, _>(|result| match result {
            Ok(value) => M::pure(Ok(value)),
            Err(error) => handler(error).inner,
        }))
    }
}
